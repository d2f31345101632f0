//! Tunable game constants.
//!
//! Defaults reproduce the classic 600x600 field with eight lanes and six
//! cats. A TOML file may override any subset of fields.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, GameError};

/// Offset of the player's row above the bottom edge.
pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game_width: f32,
    pub game_height: f32,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub max_enemies: usize,
    pub player_width: f32,
    pub player_height: f32,
    /// Upward bullet speed in px/ms.
    pub bullet_speed: f32,
    /// Enemy base speed range in px/ms, sampled once per enemy.
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// `k` in `multiplier = 2^(k * elapsed_ms)`.
    pub speed_exponent: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_width: 600.0,
            game_height: 600.0,
            enemy_width: 75.0,
            enemy_height: 156.0,
            max_enemies: 6,
            player_width: 75.0,
            player_height: 54.0,
            bullet_speed: 0.5,
            enemy_speed_min: 0.25,
            enemy_speed_max: 0.75,
            speed_exponent: 0.08,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let src = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&src)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Number of enemy lanes across the field.
    pub fn lane_count(&self) -> usize {
        (self.game_width / self.enemy_width).floor() as usize
    }

    /// Row the player (and freshly fired bullets) sit on.
    pub fn player_row(&self) -> f32 {
        self.game_height - self.player_height - PLAYER_BOTTOM_MARGIN
    }

    /// Check every precondition the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (field, value) in dims {
            if !(value > 0.0) {
                return Err(ConfigError::ZeroDimension { field });
            }
        }

        if self.enemy_width != self.player_width {
            return Err(ConfigError::LaneWidthMismatch {
                enemy_width: self.enemy_width,
                player_width: self.player_width,
            });
        }
        if self.game_width < self.player_width {
            return Err(ConfigError::FieldTooSmall { field: "player_width" });
        }
        if self.player_row() < 0.0 {
            return Err(ConfigError::FieldTooSmall { field: "player_height" });
        }

        let lane_count = self.lane_count();
        if self.max_enemies > lane_count {
            return Err(ConfigError::TooManyEnemies {
                max_enemies: self.max_enemies,
                lane_count,
            });
        }

        if !(self.enemy_speed_min >= 0.0 && self.enemy_speed_min < self.enemy_speed_max) {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.enemy_speed_min,
                max: self.enemy_speed_max,
            });
        }
        Ok(())
    }
}

//! Error types for the game core and its startup path.
//!
//! Gameplay itself never fails: bad input is a no-op. Everything here is
//! raised before the first tick (configuration, assets) or by the surface
//! the engine draws on.

use thiserror::Error;

/// The configuration cannot describe a playable field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size that must be positive is zero or negative.
    #[error("{field} must be greater than zero")]
    ZeroDimension {
        /// Name of the offending config field.
        field: &'static str,
    },

    /// More simultaneous enemies requested than there are lanes to hold them.
    #[error("max_enemies ({max_enemies}) exceeds the number of lanes ({lane_count})")]
    TooManyEnemies {
        /// Requested enemy cap.
        max_enemies: usize,
        /// Lanes available on the field.
        lane_count: usize,
    },

    /// Player steps and enemy lanes would never line up.
    #[error("enemy_width ({enemy_width}) and player_width ({player_width}) must match")]
    LaneWidthMismatch {
        /// Width of one enemy lane.
        enemy_width: f32,
        /// Width of one player step.
        player_width: f32,
    },

    /// The field cannot fit a single sprite of the named dimension.
    #[error("game field is smaller than {field}")]
    FieldTooSmall {
        /// Name of the sprite dimension that does not fit.
        field: &'static str,
    },

    /// Enemy speed bounds are empty or negative.
    #[error("invalid enemy speed range {min}..{max}")]
    InvalidSpeedRange {
        /// Lower bound (inclusive).
        min: f32,
        /// Upper bound (exclusive).
        max: f32,
    },
}

/// Anything that stops the game from starting or running.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A sprite the engine draws has no loaded image.
    #[error("asset not loaded: {0}")]
    MissingAsset(String),
}

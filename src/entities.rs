//! Game entities: the falling cats, the player and the player's bullets.
//!
//! Each entity owns its position and knows how to advance itself. Nothing
//! here refers to another entity; every interaction goes through the
//! collision and spawn modules.

use std::io;

use rand::Rng;

use crate::assets::Sprite;
use crate::config::GameConfig;
use crate::input::Direction;
use crate::surface::Surface;

/// Per-tick parameters handed to every `update`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub elapsed_ms: f32,
    pub speed_multiplier: f32,
}

pub trait Entity {
    fn position(&self) -> (f32, f32);

    fn sprite(&self) -> Sprite;

    fn update(&mut self, step: &Step);

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        let (x, y) = self.position();
        surface.draw_image(self.sprite(), x, y)
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// px/ms before the tick's speed multiplier is applied.
    pub base_speed: f32,
}

impl Enemy {
    /// A new cat entering `lane` from just above the visible field.
    pub fn spawn(lane: usize, config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self {
            x: lane as f32 * config.enemy_width,
            y: -config.enemy_height,
            base_speed: rng.gen_range(config.enemy_speed_min..config.enemy_speed_max),
        }
    }
}

impl Entity for Enemy {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Enemy
    }

    fn update(&mut self, step: &Step) {
        self.y += step.elapsed_ms * self.base_speed * step.speed_multiplier;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The player snaps to lanes: its x is always derived from a lane index.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    lane: usize,
    lane_width: f32,
    pub y: f32,
}

impl Player {
    /// Third lane from the left (or the last lane on narrower fields).
    pub fn new(config: &GameConfig) -> Self {
        Self::in_lane(2, config)
    }

    /// A player on the bottom row in `lane`, clamped to the field.
    pub fn in_lane(lane: usize, config: &GameConfig) -> Self {
        Self {
            lane: lane.min(config.lane_count().saturating_sub(1)),
            // Same expression as `Enemy::spawn`, so lane offsets compare equal.
            lane_width: config.enemy_width,
            y: config.player_row(),
        }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn x(&self) -> f32 {
        self.lane as f32 * self.lane_width
    }

    /// Step one lane sideways. Steps that would leave the field are ignored.
    pub fn move_towards(&mut self, direction: Direction, config: &GameConfig) {
        match direction {
            Direction::Left => self.lane = self.lane.saturating_sub(1),
            Direction::Right if self.lane + 1 < config.lane_count() => self.lane += 1,
            Direction::Right => {}
        }
    }
}

impl Entity for Player {
    fn position(&self) -> (f32, f32) {
        (self.x(), self.y)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Player
    }

    // Only moves on input.
    fn update(&mut self, _step: &Step) {}
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    /// Upward speed in px/ms.
    pub speed: f32,
}

impl Bullet {
    /// Fired from the player's row in lane `x`.
    pub fn fire(x: f32, config: &GameConfig) -> Self {
        Self {
            x,
            y: config.player_row(),
            speed: config.bullet_speed,
        }
    }
}

impl Entity for Bullet {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    // Bullets reuse the player's sprite.
    fn sprite(&self) -> Sprite {
        Sprite::Player
    }

    fn update(&mut self, step: &Step) {
        self.y -= step.elapsed_ms * self.speed;
    }
}

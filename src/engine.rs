//! The per-frame game loop.
//!
//! `Engine` owns every entity and the session counters. The caller feeds it
//! inputs between frames and calls `tick` once per display refresh for as
//! long as it reports `Status::Running`.

use std::io;

use rand::Rng;

use crate::assets::Sprite;
use crate::collision::{player_touched, prune_out_of_bounds, resolve_bullet_hits};
use crate::config::GameConfig;
use crate::entities::{Bullet, Entity, Player, Step};
use crate::error::ConfigError;
use crate::input::Input;
use crate::spawn::SpawnGrid;
use crate::surface::{Surface, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
}

/// Counters that live for one game session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub score: u32,
    /// Best score since the program started. Survives restarts.
    pub high_score: u32,
    pub last_frame_ms: f64,
    /// Multiplier used by the most recent tick.
    pub speed_multiplier: f32,
}

/// `2^(k * elapsed_ms)`: enemies speed up sharply after a slow frame.
pub fn speed_multiplier(speed_exponent: f32, elapsed_ms: f32) -> f32 {
    (speed_exponent * elapsed_ms).exp2()
}

pub struct Engine<R: Rng> {
    config: GameConfig,
    player: Player,
    grid: SpawnGrid,
    bullets: Vec<Bullet>,
    session: Session,
    status: Status,
    rng: R,
}

impl<R: Rng> Engine<R> {
    pub fn new(config: GameConfig, mut rng: R, now_ms: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = SpawnGrid::new(config.lane_count(), config.max_enemies)?;
        grid.refill(&config, &mut rng);
        log::info!(
            "New game: {} lanes, {} cats at a time",
            grid.lane_count(),
            grid.max_enemies()
        );

        Ok(Self {
            player: Player::new(&config),
            grid,
            bullets: Vec::new(),
            session: Session {
                score: 0,
                high_score: 0,
                last_frame_ms: now_ms,
                speed_multiplier: 1.0,
            },
            status: Status::Running,
            config,
            rng,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn grid(&self) -> &SpawnGrid {
        &self.grid
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Direct access for test harnesses that stage a scene.
    pub fn grid_mut(&mut self) -> &mut SpawnGrid {
        &mut self.grid
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Apply one input between ticks. Inputs that make no sense in the
    /// current state are ignored.
    pub fn handle_input(&mut self, input: Input, now_ms: f64) {
        match (self.status, input) {
            (Status::Running, Input::MoveLeft | Input::MoveRight) => {
                if let Some(direction) = input.direction() {
                    self.player.move_towards(direction, &self.config);
                }
            }
            (Status::Running, Input::Fire) => {
                self.bullets.push(Bullet::fire(self.player.x(), &self.config));
            }
            (Status::GameOver, Input::Restart) => self.restart(now_ms),
            _ => {}
        }
    }

    fn restart(&mut self, now_ms: f64) {
        self.player = Player::new(&self.config);
        self.grid.clear();
        self.grid.refill(&self.config, &mut self.rng);
        self.bullets.clear();
        self.session.score = 0;
        self.session.last_frame_ms = now_ms;
        self.status = Status::Running;
        log::info!("Restarted (high score {})", self.session.high_score);
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advance one frame and draw it. Returns the status after the frame;
    /// once it is `GameOver` further ticks do nothing until a restart.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> io::Result<Status> {
        if self.status == Status::GameOver {
            return Ok(self.status);
        }

        let elapsed_ms = (now_ms - self.session.last_frame_ms).max(0.0) as f32;
        self.session.speed_multiplier = speed_multiplier(self.config.speed_exponent, elapsed_ms);
        let step = Step {
            elapsed_ms,
            speed_multiplier: self.session.speed_multiplier,
        };
        log::trace!("tick: elapsed {:.1}ms, multiplier {:.3}", elapsed_ms, step.speed_multiplier);

        // 1. Move everything
        self.player.update(&step);
        self.grid.enemies_mut().for_each(|e| e.update(&step));
        self.bullets.iter_mut().for_each(|b| b.update(&step));

        // 2. Collisions and respawn
        prune_out_of_bounds(&mut self.grid, &mut self.bullets, &self.config);
        self.session.score += resolve_bullet_hits(&mut self.grid, &mut self.bullets, &self.config);
        self.grid.refill(&self.config, &mut self.rng);

        let dead = player_touched(&self.grid, &self.player, &self.config);
        self.session.high_score = self.session.high_score.max(self.session.score);

        // 3. Draw
        self.render_scene(surface)?;
        if dead {
            self.status = Status::GameOver;
            log::info!(
                "Game over: score {}, high score {}",
                self.session.score,
                self.session.high_score
            );
            self.render_game_over(surface)?;
        } else {
            self.render_hud(surface)?;
            self.session.last_frame_ms = now_ms;
        }
        Ok(self.status)
    }

    /// Draw the current state again without advancing it, e.g. after the
    /// surface was resized while the game-over overlay is showing.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        self.render_scene(surface)?;
        match self.status {
            Status::Running => self.render_hud(surface),
            Status::GameOver => self.render_game_over(surface),
        }
    }

    fn render_scene<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        surface.draw_image(Sprite::Background, 0.0, 0.0)?;
        for (_, enemy) in self.grid.enemies() {
            enemy.render(surface)?;
        }
        self.player.render(surface)?;
        for bullet in &self.bullets {
            bullet.render(surface)?;
        }
        Ok(())
    }

    fn render_hud<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        let style = TextStyle::banner();
        surface.draw_text(&format!("Cats Purged: {}", self.session.score), 5.0, 30.0, &style)?;
        surface.draw_text(&format!("Record Cats: {}", self.session.high_score), 5.0, 70.0, &style)
    }

    fn render_game_over<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        let style = TextStyle::banner();
        surface.draw_text("GAME OVER", 230.0, 250.0, &style)?;
        surface.draw_text(&format!("Cats Purged: {}", self.session.score), 210.0, 300.0, &style)?;
        surface.draw_text(&format!("Record Cats: {}", self.session.high_score), 210.0, 350.0, &style)?;
        surface.draw_text("Press Enter to Restart", 160.0, 400.0, &style)
    }
}

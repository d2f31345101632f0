//! Kittens: dodge and shoot the falling cats.
//!
//! The library is the game core (entities, lane spawning, collisions and the
//! frame loop). Drawing, input and timing come in through the `Surface`,
//! `Input` and `Clock` seams; the binary wires them to a terminal.

pub mod assets;
pub mod clock;
pub mod collision;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod input;
pub mod spawn;
pub mod surface;

pub use config::GameConfig;
pub use engine::{Engine, Session, Status};
pub use error::{ConfigError, GameError};
pub use input::Input;

//! Core types: players, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use config::{SessionConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use error::{GameError, IllegalMoveReason, Result};

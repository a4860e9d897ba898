//! Session configuration.
//!
//! Hosts describe a game with a `SessionConfig`:
//! - board dimension (boxes per side)
//! - whether a computer opponent is seated, and in which seat
//! - an optional RNG seed for reproducible computer play
//!
//! The config is serializable so hosts can keep it in whatever settings
//! format they already use.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::Player;

/// Board dimension used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Largest accepted board dimension.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of boxes per side (N). The grid axis is `2N + 1` cells.
    pub board_size: usize,

    /// Seat a computer opponent.
    pub ai_enabled: bool,

    /// Which seat the computer takes when enabled.
    pub ai_player: Player,

    /// Seed for the computer's RNG. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ai_enabled: false,
            ai_player: Player::Two,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Enable or disable the computer opponent.
    #[must_use]
    pub fn with_ai(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    /// Seat the computer opponent as `player`.
    #[must_use]
    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }
}

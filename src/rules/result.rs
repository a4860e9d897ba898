//! Game phase and final result.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};

/// Engine state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// Every edge is drawn. Terminal until reset.
    GameOver,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more boxes than the opponent.
    Winner(Player),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let one = scores[Player::One];
        let two = scores[Player::Two];
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Tie => write!(f, "tie"),
        }
    }
}

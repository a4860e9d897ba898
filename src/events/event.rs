//! Game event types.
//!
//! Events describe every state change the engine makes. Each one carries
//! the final value it reports, so delivering the same event twice leaves
//! a presentation in the same state.

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::core::Player;
use crate::rules::GameResult;

/// A state-change notification from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An edge was drawn.
    EdgeDrawn { edge: Coord, player: Player },

    /// A box was completed and now belongs to `player`.
    BoxCompleted { cell: Coord, player: Player },

    /// Current scores after a move or reset.
    ScoreUpdated { player_one: u32, player_two: u32 },

    /// Player to move next. Sent after every move, even on an extra turn.
    TurnChanged { player: Player },

    /// The last edge was drawn.
    GameOver { result: GameResult },

    /// The board was cleared for a new game.
    Reset { board_size: usize },
}

impl GameEvent {
    /// Short event name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::EdgeDrawn { .. } => "edge-drawn",
            GameEvent::BoxCompleted { .. } => "box-completed",
            GameEvent::ScoreUpdated { .. } => "score-updated",
            GameEvent::TurnChanged { .. } => "turn-changed",
            GameEvent::GameOver { .. } => "game-over",
            GameEvent::Reset { .. } => "reset",
        }
    }
}

//! Error types for the game engine.

use thiserror::Error;

use super::config::MAX_BOARD_SIZE;
use super::player::Player;
use crate::board::{CellKind, Coord};

/// Why a move was rejected as illegal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate addresses a Dot or a Box.
    NotAnEdge(CellKind),
    /// The edge has already been drawn.
    AlreadyOwned(Player),
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "outside the board"),
            IllegalMoveReason::NotAnEdge(kind) => write!(f, "cell is a {kind}, not an edge"),
            IllegalMoveReason::AlreadyOwned(owner) => write!(f, "edge already drawn by {owner}"),
        }
    }
}

/// Errors that can occur while playing a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move at {coord}: {reason}")]
    IllegalMove {
        coord: Coord,
        reason: IllegalMoveReason,
    },

    #[error("Game is already over")]
    GameAlreadyOver,

    #[error("Invalid board size: {0} (must be between 1 and {})", MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("{0} is played by the computer")]
    ComputerTurn(Player),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;

//! # dots-boxes
//!
//! A Dots and Boxes game engine with an optional heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Single Mutator**: `GameEngine` is the only thing that changes game
//!    state, and it enforces every rule itself. Callers may pre-filter
//!    clicks, but the engine never relies on it.
//!
//! 2. **Observer Contract**: The engine knows nothing about rendering. It
//!    reports changes as `GameEvent`s to registered `GameObserver`s.
//!
//! 3. **Explicit Ownership**: There is no global game instance. Whoever
//!    drives the UI owns a `Session` (or a bare `GameEngine`) and resets it
//!    explicitly.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Grid coordinates, cell kinds, ownership queries
//! - `rules`: `GameEngine`, move outcomes, results
//! - `events`: Notifications and the observer trait
//! - `agent`: Computer players (`HeuristicAgent`, `RandomAgent`)
//! - `session`: Human/computer turn orchestration
//!
//! ## Example
//!
//! ```
//! use dots_boxes::{Session, SessionConfig};
//!
//! let config = SessionConfig::new().with_board_size(2).with_ai(true).with_seed(42);
//! let mut session = Session::new(config).unwrap();
//!
//! session.request_move(0, 1).unwrap();
//! // Later, e.g. after a short delay in the UI:
//! let computer_moves = session.run_pending().unwrap();
//! assert!(!computer_moves.is_empty());
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod events;
pub mod agent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng,
    SessionConfig,
    GameError, IllegalMoveReason, Result,
};

pub use crate::board::{Board, CellKind, Coord, Orientation};

pub use crate::rules::{GameEngine, GameResult, GameState, MoveOutcome, MoveRecord, Phase};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::agent::{HeuristicAgent, MovePolicy, RandomAgent};

pub use crate::session::Session;

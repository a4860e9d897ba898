//! Game rules: move legality, box completion, turns and game end.
//!
//! `GameEngine` is the single mutator of game state. Agents and
//! presentations read it through its query methods and submit moves
//! through `apply_move`, which enforces every rule independently of
//! what the caller checked.

pub mod engine;
pub mod result;

pub use engine::{CompletedBoxes, GameEngine, GameState, MoveOutcome, MoveRecord};
pub use result::{GameResult, Phase};

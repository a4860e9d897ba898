//! Computer opponents.
//!
//! - `MovePolicy`: the seam a session uses to ask a computer player for a move
//! - `HeuristicAgent`: close a box if possible, otherwise play at random
//! - `RandomAgent`: always play at random

pub mod heuristic;
pub mod policy;

pub use heuristic::HeuristicAgent;
pub use policy::{MovePolicy, RandomAgent};

//! Game session orchestration.
//!
//! A `Session` sits between a presentation layer and the engine. It
//! forwards move requests, and when a computer player is seated it
//! schedules that player's turn as deferred work. The presentation decides
//! when to run the work (for example after a short "thinking" delay). The
//! session guarantees that deferred work runs after the human move is fully
//! applied and before the next human move is accepted.

pub mod controller;

pub use controller::Session;

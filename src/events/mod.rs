//! Engine notifications.
//!
//! The engine never touches a rendering layer directly. It emits
//! `GameEvent`s to registered `GameObserver`s, and a presentation applies
//! them however it likes.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver};

//! Observer contract between the engine and a presentation layer.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// Receives engine notifications.
///
/// The engine calls `notify` synchronously, in order, once a move has been
/// fully applied. Observers only see the outcome; they cannot veto it.
pub trait GameObserver {
    /// Handle one event.
    fn notify(&mut self, event: &GameEvent);
}

/// Shared observer: the engine holds one handle, the caller keeps another
/// to read what was observed.
impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn notify(&mut self, event: &GameEvent) {
        self.borrow_mut().notify(event);
    }
}

/// Observer that records every event it receives.
///
/// Handy for tests and for front ends that poll instead of reacting.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

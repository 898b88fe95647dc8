//! Event sinks.
//!
//! Anything implementing `EventSink` can subscribe to an engine. Closures
//! taking `&GameEvent` work directly.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::event::GameEvent;

/// Receives engine events. Fire-and-forget: nothing flows back.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Collects events into a shared buffer.
///
/// Clones share the buffer, so keep one clone and subscribe another.
///
/// ```
/// use guess_duel::events::{EventRecorder, EventSink, GameEvent};
///
/// let recorder = EventRecorder::new();
/// let mut sink = recorder.clone();
/// sink.on_event(&GameEvent::GameEnded { winner: None, target: 7 });
///
/// assert_eq!(recorder.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Take everything recorded so far, leaving the buffer empty.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for EventRecorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Forwards every event to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_event(&mut self, event: &GameEvent) {
        debug!(kind = event.kind(), ?event, "game event");
    }
}

//! Events the engine emits for a presentation layer.
//!
//! The engine holds no reference to any display. Instead it pushes typed
//! events to subscribed sinks, synchronously and in order.

pub mod event;
pub mod sink;

pub use event::{GameEvent, GuessOutcomeReport};
pub use sink::{EventRecorder, EventSink, TracingSink};

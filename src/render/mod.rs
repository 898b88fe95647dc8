//! Text rendering adapter.
//!
//! Turns engine events into game-log lines and formats the status line a
//! front end shows between turns. Purely presentational: nothing here
//! feeds back into the engine.

mod transcript;

pub use transcript::{describe, status_line, Transcript, LOG_HEADER};

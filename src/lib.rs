//! # guess-duel
//!
//! A human vs. computer number-guessing game engine.
//!
//! One hidden target lies in a configured range. Human and computer take
//! turns guessing; every guess is answered with too low, too high or
//! correct. The game ends on a correct guess or when the shared attempt
//! budget runs out.
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: The engine never sleeps or spawns. A front end
//!    decides when the computer moves and fires a `TurnTicket`; stale
//!    tickets from an earlier game or turn are dropped.
//!
//! 2. **Events, not widgets**: State changes go out as `GameEvent`s to
//!    subscribed sinks. The engine holds no reference to any display.
//!
//! 3. **Pluggable strategy**: The computer's play is a `GuessStrategy`
//!    selected through `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, RNG, game state, errors
//! - `strategy`: Computer guessing strategies
//! - `events`: Event types and sinks
//! - `engine`: The turn-taking state machine
//! - `render`: Text rendering of events for a front end

pub mod core;
pub mod strategy;
pub mod events;
pub mod engine;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameEpoch, GameError, GameRng, GameState, GuessRecord, Outcome, Phase, Player,
    Result, SearchWindow, StrategyKind,
};

pub use crate::strategy::{build_strategy, BinarySearchStrategy, GuessStrategy, RandomStrategy};

pub use crate::events::{EventRecorder, EventSink, GameEvent, GuessOutcomeReport, TracingSink};

pub use crate::engine::{GuessingGameEngine, TurnTicket};

pub use crate::render::{describe, status_line, Transcript};

//! Core types: players, configuration, RNG, game state, errors.
//!
//! These are the building blocks the engine and strategies share.

pub mod player;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use player::Player;
pub use rng::GameRng;
pub use config::{GameConfig, StrategyKind};
pub use state::{GameEpoch, GameState, GuessRecord, Outcome, Phase, SearchWindow};
pub use error::{GameError, Result};

//! The game engine: turn-taking state machine and computer turns.

mod game;

pub use game::{GuessingGameEngine, TurnTicket};

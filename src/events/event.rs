//! Event and report types.
//!
//! Per accepted guess the engine emits `GuessProcessed` followed by exactly
//! one of `TurnChanged` or `GameEnded`.

use serde::{Deserialize, Serialize};

use crate::core::{GameEpoch, Outcome, Phase, Player};

/// Result of one accepted guess, returned to the caller and carried by
/// `GameEvent::GuessProcessed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcomeReport {
    /// Who guessed.
    pub player: Player,
    /// The guessed value.
    pub value: i64,
    /// How the guess compared with the target.
    pub outcome: Outcome,
    /// Phase after the guess was applied.
    pub phase_after: Phase,
    /// Attempts used so far, this guess included.
    pub attempts_used: u32,
}

/// A state change for the presentation layer to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game began. The human moves first.
    GameStarted {
        epoch: GameEpoch,
        min_number: i64,
        max_number: i64,
        max_attempts: u32,
    },

    /// A guess was accepted and classified.
    GuessProcessed { report: GuessOutcomeReport },

    /// The turn passed to `next`.
    TurnChanged { next: Player, attempts_remaining: u32 },

    /// The game is over. `winner` is `None` when attempts ran out.
    GameEnded { winner: Option<Player>, target: i64 },
}

impl GameEvent {
    /// Short kind name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::GuessProcessed { .. } => "guess_processed",
            GameEvent::TurnChanged { .. } => "turn_changed",
            GameEvent::GameEnded { .. } => "game_ended",
        }
    }
}

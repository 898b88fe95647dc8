//! Error types.
//!
//! Every error is recoverable. Operations validate before they mutate, so a
//! returned error means the game state is exactly what it was before the call.

use thiserror::Error;

/// Errors returned by the game engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Bad parameters for a new game. Fix the config and retry.
    #[error("Invalid game config: {reason}")]
    InvalidConfig { reason: String },

    /// Human input did not parse as an integer.
    #[error("Please enter a valid number")]
    NotANumber { input: String },

    /// Human input parsed but lies outside the configured range.
    #[error("Please enter a number between {min} - {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// A human guess arrived while the game is inactive or the computer is to move.
    #[error("Not accepting input right now")]
    NotAcceptingInput,

    /// The computer's turn was invoked out of turn.
    #[error("It is not the computer's turn")]
    WrongTurn,
}

impl GameError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for malformed human input; the caller should re-prompt.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, GameError::NotANumber { .. } | GameError::OutOfRange { .. })
    }
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

//! The two sides of a duel.

use serde::{Deserialize, Serialize};

/// Who is guessing.
///
/// The human always opens a game; after every non-terminal guess the turn
/// passes to the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The side that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Player"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

//! Computer guessing strategies.
//!
//! Strategies are trait-based so the engine stays agnostic of how the
//! computer picks its number:
//! - `BinarySearchStrategy`: bisects the search window (default)
//! - `RandomStrategy`: uniform pick inside the search window
//!
//! `StrategyKind` in the game config selects one; `build_strategy` turns the
//! selection into a boxed strategy.

use crate::core::{GameRng, SearchWindow, StrategyKind};

mod binary;
mod random;

pub use binary::BinarySearchStrategy;
pub use random::RandomStrategy;

/// How the computer chooses its next guess.
pub trait GuessStrategy {
    /// Pick a guess given the window still consistent with every hint.
    ///
    /// The engine only calls this with a non-empty window and expects the
    /// result to lie inside it.
    fn next_guess(&mut self, window: SearchWindow, rng: &mut GameRng) -> i64;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Build the strategy a config asks for.
#[must_use]
pub fn build_strategy(kind: StrategyKind) -> Box<dyn GuessStrategy> {
    match kind {
        StrategyKind::BinarySearch => Box::new(BinarySearchStrategy),
        StrategyKind::Random => Box::new(RandomStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_strategy() {
        assert_eq!(build_strategy(StrategyKind::BinarySearch).name(), "binary_search");
        assert_eq!(build_strategy(StrategyKind::Random).name(), "random");
    }
}

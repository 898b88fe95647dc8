//! Bisection over the search window.

use crate::core::{GameRng, SearchWindow};

use super::GuessStrategy;

/// Guesses the midpoint `floor((low + high) / 2)` of the window.
///
/// Finds any target within `ceil(log2(max - min + 1))` of its own guesses,
/// fewer when the human's hints also narrow the window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySearchStrategy;

impl BinarySearchStrategy {
    /// Floor midpoint without overflow, correct for negative bounds too.
    #[must_use]
    pub fn midpoint(window: SearchWindow) -> i64 {
        let span = window.high as i128 - window.low as i128;
        (window.low as i128 + span.div_euclid(2)) as i64
    }
}

impl GuessStrategy for BinarySearchStrategy {
    fn next_guess(&mut self, window: SearchWindow, _rng: &mut GameRng) -> i64 {
        Self::midpoint(window)
    }

    fn name(&self) -> &'static str {
        "binary_search"
    }
}

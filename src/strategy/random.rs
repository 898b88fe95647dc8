//! Uniform guessing inside the search window.

use crate::core::{GameRng, SearchWindow};

use super::GuessStrategy;

/// Picks any value still consistent with the hints, uniformly at random.
///
/// Never contradicts a hint, but ignores the information-optimal split, so
/// it needs more guesses than bisection on average.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl GuessStrategy for RandomStrategy {
    fn next_guess(&mut self, window: SearchWindow, rng: &mut GameRng) -> i64 {
        rng.gen_range_inclusive(window.low, window.high)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

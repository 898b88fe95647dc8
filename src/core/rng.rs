//! Deterministic random number generation for target draws and strategies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: Each game hands its strategy an independent stream
//!
//! ## Usage
//!
//! ```
//! use guess_duel::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork a stream for the computer's strategy
//! let mut strategy_rng = rng.fork();
//!
//! let target = rng.gen_range_inclusive(1, 100);
//! assert!((1..=100).contains(&target));
//!
//! // Forks are deterministic: same parent seed and fork count = same stream
//! let mut rng2 = GameRng::new(42);
//! let mut strategy_rng2 = rng2.fork();
//! assert_eq!(
//!     strategy_rng.gen_range_inclusive(1, 100),
//!     strategy_rng2.gen_range_inclusive(1, 100),
//! );
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform integer in `[low, high]`, both ends inclusive.
    ///
    /// Panics if `low > high`; callers hold a validated range.
    pub fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_inclusive(1, 1000), rng2.gen_range_inclusive(1, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        for _ in 0..10 {
            assert_eq!(forked1.gen_range_inclusive(0, 1000), forked2.gen_range_inclusive(0, 1000));
        }
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(7);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed, second.seed);
    }

    #[test]
    fn test_inclusive_bounds() {
        let mut rng = GameRng::new(42);
        let mut seen_low = false;
        let mut seen_high = false;

        for _ in 0..1000 {
            let v = rng.gen_range_inclusive(-2, 2);
            assert!((-2..=2).contains(&v));
            seen_low |= v == -2;
            seen_high |= v == 2;
        }

        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.gen_range_inclusive(5, 5), 5);
    }
}

//! Game configuration types.
//!
//! A `GameConfig` is supplied to every new game and stays fixed for its
//! lifetime. It carries the number range, the attempt budget shared by both
//! players, and which strategy the computer plays with.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Which guessing strategy the computer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Bisect the search window. Never contradicts a hint.
    #[default]
    BinarySearch,
    /// Uniform pick inside the search window. Weaker play.
    Random,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::BinarySearch => write!(f, "binary_search"),
            StrategyKind::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "binary_search" | "binary" => Ok(StrategyKind::BinarySearch),
            "random" => Ok(StrategyKind::Random),
            other => Err(format!("unknown strategy '{}' (expected binary_search or random)", other)),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest possible target (inclusive).
    pub min_number: i64,

    /// Largest possible target (inclusive).
    pub max_number: i64,

    /// Total guesses allowed across both players.
    pub max_attempts: u32,

    /// The computer's strategy.
    pub strategy: StrategyKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 100,
            max_attempts: 12,
            strategy: StrategyKind::BinarySearch,
        }
    }
}

impl GameConfig {
    /// Create a config with the default range, attempts and strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive number range.
    #[must_use]
    pub fn with_range(mut self, min_number: i64, max_number: i64) -> Self {
        self.min_number = min_number;
        self.max_number = max_number;
        self
    }

    /// Set the total attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the computer's strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check that the range is non-empty and at least one attempt is allowed.
    pub fn validate(&self) -> Result<()> {
        if self.min_number >= self.max_number {
            return Err(GameError::invalid_config(format!(
                "min_number ({}) must be less than max_number ({})",
                self.min_number, self.max_number
            )));
        }
        if self.max_attempts == 0 {
            return Err(GameError::invalid_config("max_attempts must be positive"));
        }
        Ok(())
    }

    /// Check whether a value lies in `[min_number, max_number]`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min_number..=self.max_number).contains(&value)
    }

    /// Most guesses the bisecting computer makes before it finds the target.
    ///
    /// This is `ceil(log2(n))` for a range of `n` values. The human always
    /// opens, so a wrong opening guess leaves at most `n - 1` candidates, and
    /// later hints only shrink the window further.
    #[must_use]
    pub fn bisection_bound(&self) -> u32 {
        let span = self.max_number as i128 - self.min_number as i128 + 1;
        if span <= 1 {
            0
        } else {
            128 - ((span - 1) as u128).leading_zeros()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.min_number, 1);
        assert_eq!(config.max_number, 100);
        assert_eq!(config.max_attempts, 12);
        assert_eq!(config.strategy, StrategyKind::BinarySearch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_range(-10, 10)
            .with_max_attempts(3)
            .with_strategy(StrategyKind::Random);

        assert_eq!(config.min_number, -10);
        assert_eq!(config.max_number, 10);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.strategy, StrategyKind::Random);
    }

    #[test]
    fn test_validate_rejects_empty_range() {
        let equal = GameConfig::new().with_range(5, 5);
        assert!(matches!(equal.validate(), Err(GameError::InvalidConfig { .. })));

        let inverted = GameConfig::new().with_range(10, 1);
        assert!(matches!(inverted.validate(), Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = GameConfig::new().with_max_attempts(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_contains() {
        let config = GameConfig::default();
        assert!(config.contains(1));
        assert!(config.contains(100));
        assert!(!config.contains(0));
        assert!(!config.contains(101));
    }

    #[test]
    fn test_bisection_bound() {
        assert_eq!(GameConfig::default().bisection_bound(), 7);
        assert_eq!(GameConfig::new().with_range(1, 2).bisection_bound(), 1);
        assert_eq!(GameConfig::new().with_range(1, 3).bisection_bound(), 2);
        assert_eq!(GameConfig::new().with_range(1, 4).bisection_bound(), 2);
        assert_eq!(GameConfig::new().with_range(1, 5).bisection_bound(), 3);
        assert_eq!(GameConfig::new().with_range(i64::MIN, i64::MAX).bisection_bound(), 64);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("binary".parse::<StrategyKind>(), Ok(StrategyKind::BinarySearch));
        assert_eq!("binary-search".parse::<StrategyKind>(), Ok(StrategyKind::BinarySearch));
        assert_eq!("Random".parse::<StrategyKind>(), Ok(StrategyKind::Random));
        assert!("minimax".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_strategy(StrategyKind::Random);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"max_number": 50}"#).unwrap();
        assert_eq!(config.min_number, 1);
        assert_eq!(config.max_number, 50);
        assert_eq!(config.max_attempts, 12);
    }
}

//! Command-line interface for guess-duel.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use guess_duel::{GameConfig, StrategyKind};

/// Guess Duel - race the computer to a hidden number
#[derive(Parser, Debug)]
#[command(name = "guess-duel")]
#[command(about = "Human vs. computer number-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Smallest possible number
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Largest possible number
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Total guesses allowed across both players
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Computer strategy: binary_search or random
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// RNG seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// How long the computer "thinks" before guessing, in milliseconds
    #[arg(long, default_value = "2000")]
    pub think_ms: u64,
}

impl Cli {
    /// Settings from the config file (or defaults) with flag overrides applied.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str::<GameConfig>(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(min) = self.min {
            config.min_number = min;
        }
        if let Some(max) = self.max {
            config.max_number = max;
        }
        if let Some(attempts) = self.attempts {
            config.max_attempts = attempts;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }
}

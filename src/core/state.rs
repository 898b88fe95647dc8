//! Game state for one duel.
//!
//! ## GameState
//!
//! Everything about the live game:
//! - Hidden target (only revealed once the game is over)
//! - Attempts used, active player, phase
//! - The computer's search window
//! - Guess log
//!
//! A `GameState` is created by a new game and replaced wholesale by the next
//! one. Only the engine mutates it.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::Player;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Guesses are accepted.
    InProgress,
    /// Someone guessed the target.
    Won,
    /// Attempts ran out.
    Lost,
}

impl Phase {
    /// True once the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// How a guess compared with the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    /// Classify `value` against `target`.
    #[must_use]
    pub fn of(value: i64, target: i64) -> Self {
        match value.cmp(&target) {
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Equal => Outcome::Correct,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::TooLow => write!(f, "Too Low"),
            Outcome::TooHigh => write!(f, "Too High"),
            Outcome::Correct => write!(f, "Correct"),
        }
    }
}

/// One entry in the guess log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub player: Player,
    pub value: i64,
    pub outcome: Outcome,
}

/// Inclusive range of values still consistent with every hint so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchWindow {
    pub low: i64,
    pub high: i64,
}

impl SearchWindow {
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Check whether a value lies inside the window.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Shrink the window using the ordering of `value` relative to the target.
    ///
    /// A correct guess leaves the window alone.
    pub fn narrow(&mut self, value: i64, outcome: Outcome) {
        match outcome {
            Outcome::TooLow => self.low = self.low.max(value.saturating_add(1)),
            Outcome::TooHigh => self.high = self.high.min(value.saturating_sub(1)),
            Outcome::Correct => {}
        }
    }
}

impl std::fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Generation counter, bumped by every new game.
///
/// Scheduled callbacks carry the epoch they were issued for so that a late
/// callback from a previous game can be recognised and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameEpoch(pub u64);

impl GameEpoch {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for GameEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game #{}", self.0)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) epoch: GameEpoch,
    pub(crate) target: i64,
    pub(crate) attempts_used: u32,
    pub(crate) active_player: Player,
    pub(crate) phase: Phase,
    pub(crate) window: SearchWindow,
    pub(crate) log: Vec<GuessRecord>,
}

impl GameState {
    /// Fresh in-progress state: human to move, full window, empty log.
    #[must_use]
    pub(crate) fn new(config: GameConfig, epoch: GameEpoch, target: i64) -> Self {
        let window = SearchWindow::new(config.min_number, config.max_number);
        Self {
            config,
            epoch,
            target,
            attempts_used: 0,
            active_player: Player::Human,
            phase: Phase::InProgress,
            window,
            log: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn epoch(&self) -> GameEpoch {
        self.epoch
    }

    /// The target, once the game is over.
    #[must_use]
    pub fn revealed_target(&self) -> Option<i64> {
        self.phase.is_terminal().then_some(self.target)
    }

    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The computer's current search window.
    #[must_use]
    pub fn window(&self) -> SearchWindow {
        self.window
    }

    /// Guess log in submission order.
    #[must_use]
    pub fn log(&self) -> &[GuessRecord] {
        &self.log
    }

    /// Whether `player` may guess right now.
    #[must_use]
    pub fn accepts_guess_from(&self, player: Player) -> bool {
        self.phase == Phase::InProgress && self.active_player == player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), GameEpoch(1), 42);

        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.active_player(), Player::Human);
        assert_eq!(state.attempts_used(), 0);
        assert_eq!(state.attempts_remaining(), 12);
        assert_eq!(state.window(), SearchWindow::new(1, 100));
        assert!(state.log().is_empty());
        assert_eq!(state.revealed_target(), None);
    }

    #[test]
    fn test_target_revealed_only_when_terminal() {
        let mut state = GameState::new(GameConfig::default(), GameEpoch(1), 42);
        assert_eq!(state.revealed_target(), None);

        state.phase = Phase::Lost;
        assert_eq!(state.revealed_target(), Some(42));

        state.phase = Phase::Won;
        assert_eq!(state.revealed_target(), Some(42));
    }

    #[test]
    fn test_accepts_guess_from() {
        let mut state = GameState::new(GameConfig::default(), GameEpoch(1), 42);
        assert!(state.accepts_guess_from(Player::Human));
        assert!(!state.accepts_guess_from(Player::Computer));

        state.active_player = Player::Computer;
        assert!(state.accepts_guess_from(Player::Computer));

        state.phase = Phase::Won;
        assert!(!state.accepts_guess_from(Player::Computer));
    }

    #[test]
    fn test_outcome_of() {
        assert_eq!(Outcome::of(10, 42), Outcome::TooLow);
        assert_eq!(Outcome::of(50, 42), Outcome::TooHigh);
        assert_eq!(Outcome::of(42, 42), Outcome::Correct);
    }

    #[test]
    fn test_window_narrowing() {
        let mut window = SearchWindow::new(1, 100);

        window.narrow(50, Outcome::TooHigh);
        assert_eq!(window, SearchWindow::new(1, 49));

        window.narrow(25, Outcome::TooLow);
        assert_eq!(window, SearchWindow::new(26, 49));

        // Stale information never widens the window
        window.narrow(10, Outcome::TooLow);
        assert_eq!(window, SearchWindow::new(26, 49));
        window.narrow(80, Outcome::TooHigh);
        assert_eq!(window, SearchWindow::new(26, 49));

        window.narrow(30, Outcome::Correct);
        assert_eq!(window, SearchWindow::new(26, 49));
    }

    #[test]
    fn test_phase_terminal() {
        assert!(!Phase::NotStarted.is_terminal());
        assert!(!Phase::InProgress.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
    }

    #[test]
    fn test_epoch() {
        assert_eq!(GameEpoch::default().next(), GameEpoch(1));
        assert_eq!(format!("{}", GameEpoch(3)), "Game #3");
    }

    #[test]
    fn test_record_serialization() {
        let record = GuessRecord {
            player: Player::Human,
            value: 50,
            outcome: Outcome::TooHigh,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: GuessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}

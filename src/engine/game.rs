//! The guessing game engine.
//!
//! Owns the one live `GameState`, validates human input, runs the
//! computer's strategy and pushes events to subscribed sinks.
//!
//! The engine is synchronous. A caller that wants the computer to "think"
//! asks for a `TurnTicket`, waits however long it likes, then fires the
//! ticket. A ticket issued for an earlier game or an earlier turn is
//! discarded when it fires.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{
    GameConfig, GameEpoch, GameError, GameRng, GameState, GuessRecord, Outcome, Phase, Player,
    Result,
};
use crate::events::{EventSink, GameEvent, GuessOutcomeReport};
use crate::strategy::{build_strategy, GuessStrategy};

/// Handle for a deferred computer turn.
///
/// Identifies the exact game and turn it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnTicket {
    pub epoch: GameEpoch,
    /// Attempts used when the ticket was issued.
    pub attempt: u32,
}

/// Human vs. computer number-guessing engine.
///
/// ## Example
///
/// ```
/// use guess_duel::{GameConfig, GuessingGameEngine, Outcome, Phase, Player};
///
/// let mut engine = GuessingGameEngine::new(7);
/// engine.start_new_game_with_target(GameConfig::default(), 42).unwrap();
///
/// let report = engine.submit_human_guess(" 50 ").unwrap();
/// assert_eq!(report.outcome, Outcome::TooHigh);
///
/// let report = engine.run_computer_turn().unwrap();
/// assert_eq!(report.player, Player::Computer);
/// assert_eq!(report.value, 25);
/// assert_eq!(engine.phase(), Phase::InProgress);
/// ```
pub struct GuessingGameEngine {
    rng: GameRng,
    state: Option<GameState>,
    epoch: GameEpoch,
    strategy: Box<dyn GuessStrategy>,
    strategy_rng: GameRng,
    sinks: Vec<Box<dyn EventSink>>,
}

impl GuessingGameEngine {
    /// Create an engine whose target draws and random guesses follow `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(mut rng: GameRng) -> Self {
        let strategy_rng = rng.fork();
        Self {
            rng,
            state: None,
            epoch: GameEpoch::default(),
            strategy: build_strategy(GameConfig::default().strategy),
            strategy_rng,
            sinks: Vec::new(),
        }
    }

    /// Subscribe a sink. Sinks receive events in subscription order.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // === Queries ===

    /// The live game, if one has been started.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.as_ref().map_or(Phase::NotStarted, GameState::phase)
    }

    #[must_use]
    pub fn config(&self) -> Option<&GameConfig> {
        self.state.as_ref().map(GameState::config)
    }

    /// Epoch of the most recently started game. Zero before the first game.
    #[must_use]
    pub fn epoch(&self) -> GameEpoch {
        self.epoch
    }

    #[must_use]
    pub fn active_player(&self) -> Option<Player> {
        self.state.as_ref().map(GameState::active_player)
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> Option<u32> {
        self.state.as_ref().map(GameState::attempts_remaining)
    }

    /// The target, once the game is over.
    #[must_use]
    pub fn revealed_target(&self) -> Option<i64> {
        self.state.as_ref().and_then(GameState::revealed_target)
    }

    // === Lifecycle ===

    /// Start a new game with a uniformly drawn target.
    ///
    /// Discards any previous game. Fails with `InvalidConfig` and leaves the
    /// previous game untouched if the config is invalid.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, config: GameConfig) -> Result<GameEpoch> {
        config.validate()?;
        let target = self.rng.gen_range_inclusive(config.min_number, config.max_number);
        Ok(self.reset(config, target))
    }

    /// Start a new game with a target chosen by the caller.
    #[instrument(skip(self, target))]
    pub fn start_new_game_with_target(&mut self, config: GameConfig, target: i64) -> Result<GameEpoch> {
        config.validate()?;
        if !config.contains(target) {
            return Err(GameError::invalid_config(format!(
                "target {} outside [{}, {}]",
                target, config.min_number, config.max_number
            )));
        }
        Ok(self.reset(config, target))
    }

    fn reset(&mut self, config: GameConfig, target: i64) -> GameEpoch {
        self.epoch = self.epoch.next();
        self.strategy = build_strategy(config.strategy);
        self.strategy_rng = self.rng.fork();

        let event = GameEvent::GameStarted {
            epoch: self.epoch,
            min_number: config.min_number,
            max_number: config.max_number,
            max_attempts: config.max_attempts,
        };
        info!(
            epoch = self.epoch.0,
            min = config.min_number,
            max = config.max_number,
            max_attempts = config.max_attempts,
            strategy = self.strategy.name(),
            "new game started"
        );
        self.state = Some(GameState::new(config, self.epoch, target));
        self.emit(&event);

        self.epoch
    }

    // === Turns ===

    /// Submit the human's raw text input.
    ///
    /// Surrounding whitespace is ignored. Fails with `NotAcceptingInput` when
    /// the game is not in progress or the computer is to move, `NotANumber`
    /// when the text is not an integer and `OutOfRange` when it lies outside
    /// the configured range. No error changes any state.
    #[instrument(skip(self))]
    pub fn submit_human_guess(&mut self, raw: &str) -> Result<GuessOutcomeReport> {
        let Some(state) = self
            .state
            .as_mut()
            .filter(|state| state.accepts_guess_from(Player::Human))
        else {
            return Err(GameError::NotAcceptingInput);
        };

        let input = raw.trim();
        let value: i64 = input.parse().map_err(|_| GameError::NotANumber {
            input: input.to_string(),
        })?;
        let config = state.config();
        if !config.contains(value) {
            return Err(GameError::OutOfRange {
                value,
                min: config.min_number,
                max: config.max_number,
            });
        }

        let (report, follow_up) = process_guess(state, value, Player::Human);
        Ok(self.publish(report, follow_up))
    }

    /// Let the computer guess now.
    ///
    /// Fails with `WrongTurn` unless the game is in progress and the computer
    /// is to move.
    #[instrument(skip(self))]
    pub fn run_computer_turn(&mut self) -> Result<GuessOutcomeReport> {
        let Some(state) = self
            .state
            .as_mut()
            .filter(|state| state.accepts_guess_from(Player::Computer))
        else {
            return Err(GameError::WrongTurn);
        };

        let window = state.window();
        let guess = self.strategy.next_guess(window, &mut self.strategy_rng);
        debug!(strategy = self.strategy.name(), %window, guess, "computer guessing");
        debug_assert!(window.contains(guess), "strategy left the search window");

        let (report, follow_up) = process_guess(state, guess, Player::Computer);
        Ok(self.publish(report, follow_up))
    }

    /// Ticket for the computer's upcoming turn, if the computer is to move.
    #[must_use]
    pub fn pending_computer_turn(&self) -> Option<TurnTicket> {
        self.state
            .as_ref()
            .filter(|state| state.accepts_guess_from(Player::Computer))
            .map(|state| TurnTicket {
                epoch: state.epoch(),
                attempt: state.attempts_used(),
            })
    }

    /// Fire a previously issued ticket.
    ///
    /// Returns `Ok(None)` without touching state if the ticket is stale: a
    /// new game started, the turn already happened, or the game ended.
    pub fn run_scheduled_turn(&mut self, ticket: TurnTicket) -> Result<Option<GuessOutcomeReport>> {
        if self.pending_computer_turn() != Some(ticket) {
            debug!(
                ticket_epoch = ticket.epoch.0,
                ticket_attempt = ticket.attempt,
                current_epoch = self.epoch.0,
                "discarding stale computer turn"
            );
            return Ok(None);
        }
        self.run_computer_turn().map(Some)
    }

    fn publish(&mut self, report: GuessOutcomeReport, follow_up: GameEvent) -> GuessOutcomeReport {
        self.emit(&GameEvent::GuessProcessed { report });
        self.emit(&follow_up);
        report
    }

    fn emit(&mut self, event: &GameEvent) {
        for sink in &mut self.sinks {
            sink.on_event(event);
        }
    }
}

/// Apply a validated guess from the player whose turn it is.
///
/// Returns the report plus the event that follows it: `GameEnded` on a
/// correct guess or an exhausted budget, `TurnChanged` otherwise.
fn process_guess(state: &mut GameState, value: i64, player: Player) -> (GuessOutcomeReport, GameEvent) {
    state.attempts_used += 1;
    let outcome = Outcome::of(value, state.target);

    let follow_up = if outcome == Outcome::Correct {
        state.phase = Phase::Won;
        GameEvent::GameEnded {
            winner: Some(player),
            target: state.target,
        }
    } else if state.attempts_used >= state.config.max_attempts {
        state.phase = Phase::Lost;
        GameEvent::GameEnded {
            winner: None,
            target: state.target,
        }
    } else {
        // Both sides' guesses carry ordering information
        state.window.narrow(value, outcome);
        state.active_player = player.other();
        GameEvent::TurnChanged {
            next: state.active_player,
            attempts_remaining: state.attempts_remaining(),
        }
    };

    state.log.push(GuessRecord { player, value, outcome });

    debug!(
        %player,
        value,
        %outcome,
        attempts_used = state.attempts_used,
        window = %state.window,
        "guess processed"
    );
    if let GameEvent::GameEnded { winner, target } = &follow_up {
        info!(?winner, revealed = *target, attempts_used = state.attempts_used, "game over");
    }

    let report = GuessOutcomeReport {
        player,
        value,
        outcome,
        phase_after: state.phase,
        attempts_used: state.attempts_used,
    };
    (report, follow_up)
}

impl Default for GuessingGameEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for GuessingGameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuessingGameEngine")
            .field("epoch", &self.epoch)
            .field("phase", &self.phase())
            .field("strategy", &self.strategy.name())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

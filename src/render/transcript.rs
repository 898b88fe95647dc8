//! Game log rendering.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{GameState, Phase};
use crate::events::{EventSink, GameEvent};

/// Header printed when a new game starts.
pub const LOG_HEADER: &str = "=== Game Log ===";

/// Log lines for one event. Events with nothing to log yield no lines.
#[must_use]
pub fn describe(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::GameStarted {
            min_number,
            max_number,
            ..
        } => vec![
            LOG_HEADER.to_string(),
            format!(
                "New game started! The number is between {} - {}. Player goes first",
                min_number, max_number
            ),
        ],
        GameEvent::GuessProcessed { report } => {
            let mut lines = vec![format!("{} guess: {}", report.player, report.value)];
            // The hint is only useful while the game goes on
            if report.phase_after == Phase::InProgress {
                lines.push(report.outcome.to_string());
            }
            lines
        }
        GameEvent::TurnChanged { .. } => Vec::new(),
        GameEvent::GameEnded {
            winner: Some(player),
            ..
        } => vec![format!("{} got it right", player)],
        GameEvent::GameEnded { winner: None, target } => {
            vec![format!("Game over! The correct number was {}", target)]
        }
    }
}

/// Status shown between turns: whose turn it is and the attempts left.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    match state.phase() {
        Phase::InProgress => format!(
            "{} turn | Attempts left: {}",
            state.active_player(),
            state.attempts_remaining()
        ),
        Phase::NotStarted => "No game in progress".to_string(),
        Phase::Won | Phase::Lost => "Game over - start a new game to play again".to_string(),
    }
}

/// Accumulates the running game log.
///
/// Clones share the log; a new game clears it, as the header starts over.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The log of the current game.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// The log joined with newlines.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

impl EventSink for Transcript {
    fn on_event(&mut self, event: &GameEvent) {
        let mut lines = self.lines.borrow_mut();
        if matches!(event, GameEvent::GameStarted { .. }) {
            lines.clear();
        }
        lines.extend(describe(event));
    }
}

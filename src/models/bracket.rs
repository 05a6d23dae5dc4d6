//! Bracket state, match outcome, and engine errors.

use crate::models::contestant::Contestant;
use serde::{Deserialize, Serialize};

/// Errors that can occur during bracket operations.
///
/// All of these are caller contract violations, raised immediately; the
/// engine never absorbs them or leaves the round state inconsistent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Fewer than 2 usable entrants after size clamping, or an odd field
    /// that cannot be paired.
    InvalidBracketSize,
    /// Operation called before `start_bracket` has ever succeeded.
    NotStarted,
    /// `select_winner` called with a contestant that is not one of the
    /// current pair.
    InvalidWinner,
    /// `select_winner` or `current_match` called after the champion was
    /// decided and before a new start.
    AlreadyFinished,
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InvalidBracketSize => {
                write!(f, "Need at least 2 entrants (even count) to run a bracket")
            }
            BracketError::NotStarted => write!(f, "Bracket has not been started"),
            BracketError::InvalidWinner => {
                write!(f, "Selected contestant is not in the current match")
            }
            BracketError::AlreadyFinished => write!(f, "Bracket already has a winner"),
        }
    }
}

/// Result of resolving a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// More matches ahead; read the next pair with `current_match`.
    Continue,
    /// A champion has been determined; read it with `Bracket::winner`.
    Finished,
}

/// Full state of one bracket run: the shuffled pool, the active round, and
/// match bookkeeping.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Bracket {
    /// Full shuffled entrant list for this run, fixed after start.
    pub pool: Vec<Contestant>,
    /// Entrant count admitted into round one (after clamping to the pool).
    pub bracket_size: usize,
    /// Entrants competing in the active round; always an even count.
    pub current_round: Vec<Contestant>,
    /// Winners accumulated so far in the active round.
    pub next_round: Vec<Contestant>,
    /// Index of the match about to be decided within `current_round`.
    pub match_index: usize,
    /// `current_round.len() / 2`, fixed for the life of a round.
    pub matches_in_round: usize,
    /// Set once a round completes with a single survivor.
    pub finished: bool,
}

impl Bracket {
    /// Create an empty bracket; call `start_bracket` to begin a run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run has been started (and not reset since).
    pub fn is_started(&self) -> bool {
        !self.current_round.is_empty()
    }

    /// Whether the champion has been decided.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The champion, once the final match has been decided.
    pub fn winner(&self) -> Option<&Contestant> {
        if self.finished && self.next_round.len() == 1 {
            self.next_round.first()
        } else {
            None
        }
    }

    /// Human label for the active round, from the survivor count
    /// (2 -> "Final", 4 -> "Semifinal", n -> "Round of n").
    pub fn round_label(&self) -> String {
        match self.current_round.len() {
            2 => "Final".to_string(),
            4 => "Semifinal".to_string(),
            n => format!("Round of {}", n),
        }
    }

    /// 1-based position of the match about to be decided, e.g. "1/4".
    pub fn match_label(&self) -> String {
        format!("{}/{}", self.match_index + 1, self.matches_in_round)
    }

    /// Clear everything: back to the state before the first start.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.current_round.clear();
        self.next_round.clear();
        self.match_index = 0;
        self.matches_in_round = 0;
        self.bracket_size = 0;
        self.finished = false;
    }
}

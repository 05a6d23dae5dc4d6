//! Bracket engine logic: starting a run, pairing, and winner advancement.

mod bracket;

pub use bracket::{current_match, select_winner, start_bracket};

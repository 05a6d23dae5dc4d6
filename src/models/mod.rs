//! Data structures for the bracket game: contestants, categories, bracket state.

mod bracket;
mod contestant;

pub use bracket::{Bracket, BracketError, Outcome};
pub use contestant::{Category, CategoryId, Contestant, ContestantId};

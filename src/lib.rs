//! Ideal-type world cup web app: library with models, bracket logic, and the
//! contestant catalog.

pub mod catalog;
pub mod logic;
pub mod models;

pub use catalog::{available_sizes, Catalog, BRACKET_SIZES};
pub use logic::{current_match, select_winner, start_bracket};
pub use models::{Bracket, BracketError, Category, CategoryId, Contestant, ContestantId, Outcome};

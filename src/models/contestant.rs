//! Contestant and Category data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a contestant (used in matches and lookups).
pub type ContestantId = Uuid;

/// Unique identifier for a category.
pub type CategoryId = Uuid;

/// A candidate option the user can pick in a match.
///
/// Contestants come from the catalog and are never mutated by the bracket
/// engine; the engine only reorders and filters them. Identity is `id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    pub name: String,
    /// Path under /static to the display image.
    pub image_path: String,
    pub category_id: CategoryId,
}

impl Contestant {
    /// Create a new contestant with a fresh id.
    pub fn new(
        name: impl Into<String>,
        image_path: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            image_path: image_path.into(),
            category_id,
        }
    }
}

/// A pool of contestants the user can run a bracket over.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image_path: String,
    /// How many contestants exist for this category; drives which bracket
    /// sizes the setup screen offers.
    pub contestant_count: usize,
}

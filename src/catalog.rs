//! In-memory contestant catalog: the data-access collaborator behind the
//! bracket engine. Stands in for a real database; a DB-backed implementation
//! can replace it without touching the engine.

use crate::models::{Category, CategoryId, Contestant};
use uuid::Uuid;

/// Bracket sizes the setup screen can offer.
pub const BRACKET_SIZES: [usize; 5] = [4, 8, 16, 32, 64];

/// Which of the supported bracket sizes a pool of `contestant_count` can fill.
pub fn available_sizes(contestant_count: usize) -> Vec<usize> {
    BRACKET_SIZES
        .iter()
        .copied()
        .filter(|&size| size <= contestant_count)
        .collect()
}

/// All categories and their contestants, held in memory.
pub struct Catalog {
    categories: Vec<Category>,
    contestants: Vec<Contestant>,
}

/// (category display name, contestant name prefix, image slug)
const SAMPLE_CATEGORIES: [(&str, &str, &str); 9] = [
    ("Female Idols", "Female Idol", "female-idol"),
    ("Male Idols", "Male Idol", "male-idol"),
    ("Food", "Food", "food"),
    ("Travel Destinations", "Destination", "travel"),
    ("Male Actors", "Male Actor", "male-actor"),
    ("Female Actors", "Female Actor", "female-actor"),
    ("Movies & Dramas", "Title", "movie-drama"),
    ("OST", "OST", "ost"),
    ("Animation", "Animation", "animation"),
];

const CONTESTANTS_PER_CATEGORY: usize = 64;

impl Catalog {
    /// Build the sample dataset: a fixed category list with 64 generated
    /// contestants each.
    pub fn sample() -> Self {
        let mut categories = Vec::new();
        let mut contestants = Vec::new();
        for (name, prefix, slug) in SAMPLE_CATEGORIES {
            let category_id = Uuid::new_v4();
            for i in 1..=CONTESTANTS_PER_CATEGORY {
                contestants.push(Contestant::new(
                    format!("{} {}", prefix, i),
                    format!("images/contestants/{}-{}.jpg", slug, i),
                    category_id,
                ));
            }
            categories.push(Category {
                id: category_id,
                name: name.to_string(),
                image_path: format!("images/categories/{}.jpg", slug),
                contestant_count: CONTESTANTS_PER_CATEGORY,
            });
        }
        Self {
            categories,
            contestants,
        }
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Fresh list of the category's contestants (callers may reorder freely).
    pub fn contestants_for_category(&self, id: CategoryId) -> Vec<Contestant> {
        self.contestants
            .iter()
            .filter(|c| c.category_id == id)
            .cloned()
            .collect()
    }
}

//! Integration tests for the contestant catalog and size availability.

use pick_bracket_web::{available_sizes, Catalog, BRACKET_SIZES};

#[test]
fn sample_catalog_has_full_pools() {
    let catalog = Catalog::sample();
    assert!(!catalog.categories().is_empty());
    for category in catalog.categories() {
        assert_eq!(category.contestant_count, 64);
        let pool = catalog.contestants_for_category(category.id);
        assert_eq!(pool.len(), 64);
        assert!(pool.iter().all(|c| c.category_id == category.id));
    }
}

#[test]
fn category_lookup_by_id() {
    let catalog = Catalog::sample();
    let first = &catalog.categories()[0];
    assert_eq!(catalog.category(first.id), Some(first));
    assert!(catalog.category(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn contestant_names_and_images_are_distinct() {
    let catalog = Catalog::sample();
    let first = &catalog.categories()[0];
    let pool = catalog.contestants_for_category(first.id);
    let names: std::collections::HashSet<_> = pool.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names.len(), pool.len());
    assert!(pool.iter().all(|c| c.image_path.starts_with("images/contestants/")));
}

#[test]
fn available_sizes_respect_pool_size() {
    assert_eq!(available_sizes(64), BRACKET_SIZES.to_vec());
    assert_eq!(available_sizes(100), BRACKET_SIZES.to_vec());
    assert_eq!(available_sizes(33), vec![4, 8, 16, 32]);
    assert_eq!(available_sizes(10), vec![4, 8]);
    assert_eq!(available_sizes(3), Vec::<usize>::new());
}

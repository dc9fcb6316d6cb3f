//! Category and tag vocabulary tests.

use crate::common::bookmark_records;
use linkfind::{all_categories, all_tags, clean_tags, filter_by_category, Record};

#[test]
fn test_categories_of_bookmarks() {
    assert_eq!(
        all_categories(&bookmark_records()),
        ["Documentación", "Música", "Noticias", "Personal", "Work"]
    );
}

#[test]
fn test_tags_of_bookmarks() {
    assert_eq!(
        all_tags(&bookmark_records()),
        ["chill", "ci", "code", "git", "lectura", "news", "rust", "search", "tech"]
    );
}

#[test]
fn test_every_category_filters_to_something() {
    let records = bookmark_records();
    for category in all_categories(&records) {
        assert!(
            !filter_by_category(&records, &category).is_empty(),
            "category {category:?} matched nothing"
        );
    }
}

#[test]
fn test_empty_collection() {
    let records: Vec<Record> = Vec::new();
    assert!(all_categories(&records).is_empty());
    assert!(all_tags(&records).is_empty());
}

#[test]
fn test_clean_tags_keeps_first_occurrence() {
    assert_eq!(clean_tags(["B", "a", " b ", "A", "c"]), ["b", "a", "c"]);
}

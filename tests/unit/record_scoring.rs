//! Record scoring tests: field weights, best field, clamping.

use crate::common::{assert_close, make_link};
use linkfind::{best_field, field_weight, score_record, Field, Record};

#[test]
fn test_weights() {
    assert_eq!(field_weight(Field::Title), 1.2);
    assert_eq!(field_weight(Field::Tag), 1.1);
    assert_eq!(field_weight(Field::Url), 1.0);
    assert_eq!(field_weight(Field::Category), 1.0);
}

#[test]
fn test_title_substring_clamped() {
    let github = make_link("GitHub", "https://github.com", "Work", &["code"]);
    assert_eq!(score_record("git", &github), 1.0);
}

#[test]
fn test_title_beats_url_for_same_tier() {
    // Same substring hit in title and url: the title's weight wins
    let record = make_link("Rust Forum", "https://users.rust-lang.org", "Dev", &[]);
    assert_eq!(best_field("rust", &record).map(|(f, _)| f), Some(Field::Title));
}

#[test]
fn test_weight_reorders_within_tier() {
    // Word overlap 0.5 in the title (× 1.2 = 0.6) beats 0.5 in a tag (× 1.1 = 0.55)
    let record = Record::new("rust notes").with_tags(["rust tips"]);
    let (field, weighted) = best_field("rust book", &record).unwrap();
    assert_eq!(field, Field::Title);
    assert_close(weighted, 0.6);
}

#[test]
fn test_best_tag_wins() {
    let record = Record::new("Bookmark").with_tags(["misc", "rustacean", "rust"]);
    // "rust" exact tag: 1.0 × 1.1, clamped
    assert_eq!(score_record("rust", &record), 1.0);
    let (field, weighted) = best_field("rust", &record).unwrap();
    assert_eq!(field, Field::Tag);
    assert_close(weighted, 1.1);
}

#[test]
fn test_typo_in_title() {
    let record = Record::new("Google");
    // fallback 0.5 × 1.2
    assert_close(score_record("gogle", &record), 0.6);
}

#[test]
fn test_missing_fields_contribute_nothing() {
    let only_url = Record::default().with_url("https://example.com/recipes");
    assert_eq!(score_record("recipes", &only_url), 0.9);
    assert_eq!(best_field("recipes", &only_url).map(|(f, _)| f), Some(Field::Url));
}

#[test]
fn test_empty_record() {
    assert_eq!(score_record("anything", &Record::default()), 0.0);
}

#[test]
fn test_empty_query() {
    assert_eq!(score_record("", &Record::default()), 1.0);
    assert_eq!(best_field("", &Record::new("x")), None);
}

#[test]
fn test_score_never_exceeds_one() {
    let record = make_link("rust", "rust", "rust", &["rust", "rust"]);
    assert_eq!(score_record("rust", &record), 1.0);
}

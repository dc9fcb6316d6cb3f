//! Edge cases: empty inputs, blank queries, odd records, extreme thresholds.

use crate::common::{bookmark_records, sample_records, titles};
use linkfind::{search, search_with, Record, SearchOptions, DEFAULT_THRESHOLD};

#[test]
fn test_empty_collection() {
    let records: Vec<Record> = Vec::new();
    assert!(search(&records, "git", "", "", DEFAULT_THRESHOLD).is_empty());
    assert!(search(&records, "", "", "", DEFAULT_THRESHOLD).is_empty());
}

#[test]
fn test_empty_query_shortcut() {
    let records = bookmark_records();
    let results = search(&records, "", "", "", DEFAULT_THRESHOLD);

    assert_eq!(results.len(), records.len());
    assert!(results.iter().all(|r| r.score == 1.0));
    let expected: Vec<String> = records
        .iter()
        .map(|r| r.title.clone().unwrap_or_default())
        .collect();
    assert_eq!(titles(&results), expected);
}

#[test]
fn test_blank_query_is_not_empty_query() {
    let records = sample_records();
    assert!(search(&records, "   \t", "", "", DEFAULT_THRESHOLD).is_empty());

    // Scored like any other query: every field scores 0.0
    let results = search(&records, "   ", "", "", 0.0);
    assert_eq!(results.len(), records.len());
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_records_without_fields_never_match() {
    let records = vec![Record::default(), Record::new("GitHub"), Record::default()];
    let results = search(&records, "git", "", "", DEFAULT_THRESHOLD);
    assert_eq!(titles(&results), ["GitHub"]);
}

#[test]
fn test_zero_threshold_keeps_everything() {
    let records = vec![Record::default(), Record::new("GitHub")];
    let results = search(&records, "git", "", "", 0.0);
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn test_out_of_range_thresholds_clamp() {
    let records = bookmark_records();
    assert_eq!(
        search(&records, "git", "", "", -0.5),
        search(&records, "git", "", "", 0.0)
    );
    assert_eq!(
        search(&records, "git", "", "", 42.0),
        search(&records, "git", "", "", 1.0)
    );
}

#[test]
fn test_limit_zero() {
    let records = bookmark_records();
    let options = SearchOptions::new().limit(0);
    assert!(search_with(&records, "git", &options).is_empty());
}

#[test]
fn test_limit_larger_than_results() {
    let records = sample_records();
    let options = SearchOptions::new().limit(10);
    assert_eq!(search_with(&records, "git", &options).len(), 1);
}

#[test]
fn test_options_carry_filters_and_threshold() {
    let records = bookmark_records();
    let options = SearchOptions::new()
        .category("Work")
        .tag("code")
        .threshold(0.5);
    assert_eq!(
        search_with(&records, "git", &options),
        search(&records, "git", "Work", "code", 0.5)
    );
}

#[test]
#[should_panic(expected = "NaN")]
fn test_nan_threshold_is_a_bug() {
    let records = sample_records();
    search(&records, "git", "", "", f64::NAN);
}

#[test]
fn test_very_long_query() {
    let records = bookmark_records();
    let query = "rust ".repeat(200);
    let results = search(&records, &query, "", "", DEFAULT_THRESHOLD);
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
}

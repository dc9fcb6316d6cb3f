//! Determinism: identical inputs give identical, identically ordered output.

use crate::common::bookmark_records;
use linkfind::{search, DEFAULT_THRESHOLD};

const QUERIES: &[&str] = &["git", "gogle", "rust book", "news", "café", "", "zzz", "o"];

#[test]
fn test_repeated_search_is_identical() {
    let records = bookmark_records();
    for query in QUERIES {
        let first = search(&records, query, "", "", DEFAULT_THRESHOLD);
        let second = search(&records, query, "", "", DEFAULT_THRESHOLD);
        assert_eq!(first, second, "search not deterministic for {query:?}");
    }
}

#[test]
fn test_copies_of_collection_rank_identically() {
    let records = bookmark_records();
    let copy = records.clone();
    for query in QUERIES {
        let a = search(&records, query, "", "", DEFAULT_THRESHOLD);
        let b = search(&copy, query, "", "", DEFAULT_THRESHOLD);
        assert_eq!(a, b, "results differ between equal collections for {query:?}");
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    use linkfind::search_parallel;

    let mut records = bookmark_records();
    // Enough records to actually spread across threads
    for i in 0..500 {
        records.push(
            linkfind::Record::new(format!("Generated link {i}"))
                .with_url(format!("https://example.com/{i}"))
                .with_tags([if i % 2 == 0 { "even" } else { "odd" }])
                .with_updated_at(format!("2024-01-01T00:00:{:02}", i % 60)),
        );
    }

    for query in QUERIES.iter().chain(&["link 4", "even", "exmaple"]) {
        for threshold in [0.0, DEFAULT_THRESHOLD, 0.5] {
            assert_eq!(
                search_parallel(&records, query, "", "", threshold),
                search(&records, query, "", "", threshold),
                "parallel search differs for {query:?} at {threshold}"
            );
        }
    }
}

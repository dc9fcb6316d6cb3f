// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API and checks that it never
//! panics and that results stay in range, filtered, and ranked.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkfind::testing::bookmark_records;
use linkfind::{compare_scored, search, Record, DEFAULT_THRESHOLD};
use std::cmp::Ordering;

fuzz_target!(|query: &[u8]| {
    static RECORDS: std::sync::OnceLock<Vec<Record>> = std::sync::OnceLock::new();
    let records = RECORDS.get_or_init(bookmark_records);

    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();

    // INVARIANT 1: search() never panics, for any query used as any argument
    let results = search(records, &query, "", "", DEFAULT_THRESHOLD);
    let _ = search(records, "", &query, &query, DEFAULT_THRESHOLD);

    // INVARIANT 2: bounded by the collection, scores in [threshold, 1]
    assert!(results.len() <= records.len());
    for result in &results {
        assert!(
            result.score >= DEFAULT_THRESHOLD && result.score <= 1.0,
            "score {} out of range for query='{}'",
            result.score, query
        );
    }

    // INVARIANT 3: ranked by score, then recency
    for pair in results.windows(2) {
        assert_ne!(
            compare_scored(&pair[0], &pair[1]),
            Ordering::Greater,
            "results not sorted for query='{}'",
            query
        );
    }

    // INVARIANT 4: only the empty query returns everything with 1.0;
    // a whitespace-only query matches nothing
    if query.is_empty() {
        assert_eq!(results.len(), records.len());
        assert!(results.iter().all(|r| r.score == 1.0));
    } else if query.trim().is_empty() {
        assert!(results.is_empty(), "blank query matched for query='{}'", query);
    }
});

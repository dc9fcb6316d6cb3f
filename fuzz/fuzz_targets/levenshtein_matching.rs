// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and field similarity.
//!
//! Checks the metric bounds of the edit distance and that the tiered
//! similarity stays in range on arbitrary Unicode.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkfind::{fuzzy_score, levenshtein};

/// Fuzz input for edit distance matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    /// Query string (UTF-8, capped to avoid timeout)
    query_bytes: Vec<u8>,
    /// Text to match against
    target_bytes: Vec<u8>,
}

fn capped(bytes: &[u8], max_chars: usize) -> String {
    String::from_utf8_lossy(bytes).chars().take(max_chars).collect()
}

fuzz_target!(|input: MatchInput| {
    let query = capped(&input.query_bytes, 50);
    let target = capped(&input.target_bytes, 100);

    let distance = levenshtein(&query, &target);
    let (ql, tl) = (query.chars().count(), target.chars().count());

    // INVARIANT 1: |len(a) - len(b)| <= d <= max(len(a), len(b))
    assert!(
        ql.abs_diff(tl) <= distance && distance <= ql.max(tl),
        "distance {} out of bounds for query='{}', target='{}'",
        distance, query, target
    );

    // INVARIANT 2: symmetric
    assert_eq!(distance, levenshtein(&target, &query));

    // INVARIANT 3: zero exactly for equal strings
    assert_eq!(distance == 0, query == target);

    // INVARIANT 4: similarity in [0, 1]
    let score = fuzzy_score(&query, &target);
    assert!(
        (0.0..=1.0).contains(&score),
        "score {} out of range for query='{}', target='{}'",
        score, query, target
    );
});

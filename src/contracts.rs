//! Runtime contracts for scores and result ordering.
//!
//! Debug-mode assertions that check the properties the ranking relies on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** during development and in tests
//!
//! | Contract Function        | Property                                   |
//! |--------------------------|--------------------------------------------|
//! | `check_score_in_range`   | every score lies in `[0, 1]`               |
//! | `check_results_sorted`   | results are ordered by `compare_scored`    |
//!
//! # Usage
//!
//! ```ignore
//! use linkfind::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_results_sorted(&results);
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Tier dominance: each similarity tier tops out below the one before it, and
/// the fallback can never reach a word-overlap cap.
const _: () = {
    use crate::scoring::{
        EXACT_SCORE, FALLBACK_SCALE, SUBSTRING_SCORE, WORD_OVERLAP_CAP,
    };

    assert!(EXACT_SCORE > SUBSTRING_SCORE);
    assert!(SUBSTRING_SCORE > WORD_OVERLAP_CAP);
    // Fallback similarity is below 1.0, so its ceiling is FALLBACK_SCALE
    assert!(WORD_OVERLAP_CAP > FALLBACK_SCALE);
};

/// Field weights only ever boost, with title above tags above the rest.
const _: () = {
    use crate::scoring::fields::{CATEGORY_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT, URL_WEIGHT};

    assert!(TITLE_WEIGHT >= TAG_WEIGHT);
    assert!(TAG_WEIGHT >= URL_WEIGHT);
    assert!(URL_WEIGHT >= 1.0);
    assert!(CATEGORY_WEIGHT >= 1.0);
};

use crate::scoring::ranking::compare_scored;
use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// Check that a score is a finite value in `[0, 1]`.
///
/// # Panics (debug builds only)
/// Panics if the score is NaN or outside the range.
#[inline]
pub fn check_score_in_range(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Score out of range: {} not in [0, 1]",
        score
    );
}

/// Check that adjacent results are in ranking order.
///
/// # Panics (debug builds only)
/// Panics at the first pair that `compare_scored` orders the other way round.
#[inline]
pub fn check_results_sorted(results: &[ScoredRecord<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            compare_scored(&pair[0], &pair[1]) != Ordering::Greater,
            "Results not sorted at position {}: score {} before score {}",
            i,
            pair[0].score,
            pair[1].score
        );
    }
}

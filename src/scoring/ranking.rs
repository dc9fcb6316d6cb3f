// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted.
//!
//! Score dominates. Only when two scores are equal does recency matter, and
//! only when both are equal does input order decide (the sort is stable).

use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// Compare two scored records for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **updated_at** - descending (more recent wins); a missing timestamp is
///    older than any present one
///
/// Returns `Equal` when both keys tie, leaving the decision to a stable sort.
///
/// # Example
///
/// ```
/// use linkfind::{compare_scored, Record, ScoredRecord};
/// use std::cmp::Ordering;
///
/// let old = Record::new("a").with_updated_at("2023-01-01");
/// let new = Record::new("b").with_updated_at("2024-01-01");
///
/// assert_eq!(
///     compare_scored(&ScoredRecord::new(&new, 0.5), &ScoredRecord::new(&old, 0.5)),
///     Ordering::Less
/// );
/// ```
pub fn compare_scored(a: &ScoredRecord<'_>, b: &ScoredRecord<'_>) -> Ordering {
    // Scores are clamped finite values, total_cmp agrees with partial_cmp on them
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => b.record.updated_at.cmp(&a.record.updated_at),
        ord => ord,
    }
}

/// Stable sort by [`compare_scored`].
pub fn sort_results(results: &mut [ScoredRecord<'_>]) {
    results.sort_by(compare_scored);
}

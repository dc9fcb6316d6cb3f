// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: filters → scorer → threshold → sort.
//!
//! This is the only entry point callers need. Everything is a pure function of
//! its inputs: no caches, no state between calls, no mutation of the records.
//! The same inputs always produce the same, identically ordered output.
//!
//! ```text
//! records ──▶ category filter ──▶ tag filter ──┬──▶ (empty query) all, score 1.0
//!                                              │
//!                                              └──▶ score_record ──▶ ≥ threshold ──▶ sort
//! ```

pub mod filter;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::contracts::{check_results_sorted, check_score_in_range};
use crate::scoring::fields::score_record_normalized;
use crate::scoring::ranking::sort_results;
use crate::types::{Record, ScoredRecord};
use crate::utils::normalize;

pub use filter::{apply_filters, filter_by_category, filter_by_tag, ALL_CATEGORIES};

/// Minimum score a record needs to be returned, unless configured otherwise.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Filters, cutoff, and result cap for [`search_with`].
///
/// # Example
///
/// ```
/// use linkfind::{search_with, Record, SearchOptions};
///
/// let records = vec![
///     Record::new("GitHub").with_category("Work"),
///     Record::new("GitLab").with_category("Work"),
///     Record::new("Gitter").with_category("Personal"),
/// ];
/// let options = SearchOptions::new().category("Work").limit(1);
///
/// let results = search_with(&records, "git", &options);
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Exact category, or empty / [`ALL_CATEGORIES`] for no filter.
    pub category: String,
    /// Tag compared after normalization, or empty for no filter.
    pub tag: String,
    /// Minimum score, clamped to `[0, 1]`.
    pub threshold: f64,
    /// Maximum number of results, applied after sorting.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            category: String::new(),
            tag: String::new(),
            threshold: DEFAULT_THRESHOLD,
            limit: None,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Filter, score, and rank `records` against `query`.
///
/// 1. Keep records in `category` (exact) and carrying `tag` (normalized).
/// 2. Empty query: return the survivors with score 1.0 in input order. A
///    whitespace-only query is not empty; it scores 0.0 everywhere.
/// 3. Otherwise score each survivor and keep those with `score >= threshold`.
/// 4. Sort by score, then recency, keeping input order for full ties.
///
/// `threshold` outside `[0, 1]` is clamped.
///
/// # Panics
///
/// Panics if `threshold` is NaN. That is a caller bug, not a data problem.
///
/// # Example
///
/// ```
/// use linkfind::{search, Record};
///
/// let records = vec![
///     Record::new("Google").with_url("https://google.com"),
///     Record::new("GitHub").with_url("https://github.com"),
/// ];
///
/// let results = search(&records, "git", "", "", 0.1);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].record.title.as_deref(), Some("GitHub"));
/// ```
pub fn search<'a>(
    records: &'a [Record],
    query: &str,
    category: &str,
    tag: &str,
    threshold: f64,
) -> Vec<ScoredRecord<'a>> {
    let threshold = clamp_threshold(threshold);
    let candidates = apply_filters(records, category, tag);

    if query.is_empty() {
        return match_all(candidates);
    }
    let query = normalize(query);

    let candidate_count = candidates.len();
    let kept: Vec<ScoredRecord<'a>> = candidates
        .into_iter()
        .filter_map(|record| score_candidate(&query, record, threshold))
        .collect();

    rank(kept, candidate_count, threshold)
}

/// [`search`] configured by [`SearchOptions`], truncated to `options.limit`.
pub fn search_with<'a>(
    records: &'a [Record],
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredRecord<'a>> {
    let mut results = search(
        records,
        query,
        &options.category,
        &options.tag,
        options.threshold,
    );
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }
    results
}

/// [`search`] with records scored on the rayon thread pool.
///
/// Scoring is independent per record, so it parallelizes trivially. The kept
/// records are collected in input order before the same stable sort runs, so
/// the output is identical to [`search`].
#[cfg(feature = "parallel")]
pub fn search_parallel<'a>(
    records: &'a [Record],
    query: &str,
    category: &str,
    tag: &str,
    threshold: f64,
) -> Vec<ScoredRecord<'a>> {
    let threshold = clamp_threshold(threshold);
    let candidates = apply_filters(records, category, tag);

    if query.is_empty() {
        return match_all(candidates);
    }
    let query = normalize(query);

    let candidate_count = candidates.len();
    let kept: Vec<ScoredRecord<'a>> = candidates
        .par_iter()
        .filter_map(|&record| score_candidate(&query, record, threshold))
        .collect();

    rank(kept, candidate_count, threshold)
}

fn clamp_threshold(threshold: f64) -> f64 {
    assert!(!threshold.is_nan(), "search threshold must not be NaN");
    threshold.clamp(0.0, 1.0)
}

fn match_all(candidates: Vec<&Record>) -> Vec<ScoredRecord<'_>> {
    debug!(candidates = candidates.len(), "empty query, returning all candidates");
    candidates
        .into_iter()
        .map(|record| ScoredRecord::new(record, 1.0))
        .collect()
}

fn score_candidate<'a>(query: &str, record: &'a Record, threshold: f64) -> Option<ScoredRecord<'a>> {
    let score = score_record_normalized(query, record);
    check_score_in_range(score);
    trace!(title = record.title.as_deref().unwrap_or(""), score, "scored record");
    (score >= threshold).then(|| ScoredRecord::new(record, score))
}

fn rank(mut kept: Vec<ScoredRecord<'_>>, candidates: usize, threshold: f64) -> Vec<ScoredRecord<'_>> {
    sort_results(&mut kept);
    check_results_sorted(&kept);
    debug!(candidates, kept = kept.len(), threshold, "ranked search results");
    kept
}

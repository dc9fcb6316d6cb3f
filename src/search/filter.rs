// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category and tag filters, applied before any scoring.
//!
//! Filters narrow the candidate set; they never score. The category filter is
//! exact taxonomy matching (case-sensitive, no normalization). The tag filter
//! compares normalized tags, since tags are free-form and typed inconsistently.
//!
//! Both return borrowed views in input order and never touch the records.

use crate::types::Record;
use crate::utils::normalize;

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Keep records whose category equals `category` exactly.
///
/// An empty filter or [`ALL_CATEGORIES`] keeps every record.
pub fn filter_by_category<'a, I>(records: I, category: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if is_unfiltered_category(category) {
        return records.into_iter().collect();
    }

    records
        .into_iter()
        .filter(|record| record.category.as_deref() == Some(category))
        .collect()
}

/// Keep records carrying a tag equal to `tag` after normalization.
///
/// An empty filter keeps every record. A whitespace-only filter normalizes to
/// `""` and keeps only records with a tag that also normalizes to `""`.
pub fn filter_by_tag<'a, I>(records: I, tag: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if tag.is_empty() {
        return records.into_iter().collect();
    }

    let wanted = normalize(tag);

    records
        .into_iter()
        .filter(|record| record.tags.iter().any(|t| normalize(t) == wanted))
        .collect()
}

/// Category filter, then tag filter.
pub fn apply_filters<'a>(records: &'a [Record], category: &str, tag: &str) -> Vec<&'a Record> {
    let by_category = filter_by_category(records, category);
    filter_by_tag(by_category, tag)
}

fn is_unfiltered_category(category: &str) -> bool {
    category.is_empty() || category == ALL_CATEGORIES
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category and tag vocabularies for filter pickers.
//!
//! The filter values a caller offers should come from the records themselves,
//! so a category picked from [`all_categories`] always matches
//! [`filter_by_category`](crate::filter_by_category) exactly.

use std::collections::BTreeSet;
use std::collections::HashSet;

use crate::types::Record;

/// Unique, non-empty categories in ascending order, spelled as stored.
pub fn all_categories(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.category.as_deref())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Unique, non-empty tags, lower-cased, in ascending order.
pub fn all_tags(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.tags.iter())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Trim and lower-case tags, dropping empties and later duplicates.
///
/// First-seen order is kept, so the tags read the way the user typed them.
pub fn clean_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

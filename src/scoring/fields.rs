// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record scoring: a record is as relevant as its best field.
//!
//! Each populated field is scored with [`fuzzy_score_normalized`] and multiplied
//! by its weight. Title and tag matches get a small boost so that, for example,
//! a 0.9 substring hit in the title (1.08) edges out the same hit in the URL
//! (0.9). The result is clamped to 1.0, so boosts reorder matches but never
//! push a record past a perfect score.
//!
//! | Field    | Weight |
//! |----------|--------|
//! | Title    | 1.2    |
//! | Tag      | 1.1    |
//! | Url      | 1.0    |
//! | Category | 1.0    |

use crate::scoring::core::fuzzy_score_normalized;
use crate::types::{Field, Record};
use crate::utils::normalize;

pub const TITLE_WEIGHT: f64 = 1.2;
pub const TAG_WEIGHT: f64 = 1.1;
pub const URL_WEIGHT: f64 = 1.0;
pub const CATEGORY_WEIGHT: f64 = 1.0;

/// Multiplier applied to a field's similarity score.
pub fn field_weight(field: Field) -> f64 {
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Url => URL_WEIGHT,
        Field::Category => CATEGORY_WEIGHT,
        Field::Tag => TAG_WEIGHT,
    }
}

/// Relevance of `record` to `query` in `[0, 1]`.
///
/// An empty query matches everything with 1.0. A query that is only
/// whitespace is not empty: it normalizes to nothing and matches no field, so
/// it scores 0.0. A record with no populated fields scores 0.0.
///
/// # Examples
///
/// ```
/// use linkfind::{score_record, Record};
///
/// let record = Record::new("GitHub").with_url("https://github.com");
/// assert_eq!(score_record("git", &record), 1.0);
/// assert_eq!(score_record("", &record), 1.0);
/// assert_eq!(score_record("xyz123", &record), 0.0);
/// ```
pub fn score_record(query: &str, record: &Record) -> f64 {
    if query.is_empty() {
        return 1.0;
    }
    score_record_normalized(&normalize(query), record)
}

/// [`score_record`] with a non-empty query that is already normalized.
pub(crate) fn score_record_normalized(query: &str, record: &Record) -> f64 {
    best_field_normalized(query, record).map_or(0.0, |(_, score)| score.min(1.0))
}

/// The field that gave `record` its score, with the weighted (unclamped) score.
///
/// Returns `None` for an empty query or a record with no populated fields.
/// Equal weighted scores resolve in the order title, url, category, tags.
pub fn best_field(query: &str, record: &Record) -> Option<(Field, f64)> {
    if query.is_empty() {
        return None;
    }
    best_field_normalized(&normalize(query), record)
}

fn best_field_normalized(query: &str, record: &Record) -> Option<(Field, f64)> {
    let scalars = Field::SCALAR
        .into_iter()
        .filter_map(|field| record.field_text(field).map(|text| (field, text)));
    let tags = record.tags.iter().map(|tag| (Field::Tag, tag.as_str()));

    let mut best: Option<(Field, f64)> = None;
    for (field, text) in scalars.chain(tags) {
        let weighted = fuzzy_score_normalized(query, &normalize(text)) * field_weight(field);
        // Strict comparison keeps the earliest field on ties
        if best.map_or(true, |(_, score)| weighted > score) {
            best = Some((field, weighted));
        }
    }
    best
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the engine searches and the results it hands back.
//!
//! Records are owned by the caller. The engine only ever borrows them, which is
//! why [`ScoredRecord`] carries a reference rather than a copy: results point
//! back into the caller's collection and nothing is mutated along the way.
//!
//! # Invariants
//!
//! - **Record**: any field may be absent. An absent field contributes a score of
//!   0.0 and never fails a search.
//! - **ScoredRecord**: `0.0 <= score <= 1.0`.

use serde::{Deserialize, Serialize};

/// A link entry as far as search is concerned.
///
/// Only the fields the engine reads are modelled. Serialized input may carry
/// any number of other fields (ids, notes, favorite flags); they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Opaque, totally ordered timestamp (ISO-8601 text sorts correctly).
    /// Used only to break score ties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Record {
    /// Create a record with a title and nothing else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    /// The text stored in a single-valued field, if present.
    ///
    /// Tags are multi-valued and are not returned here; see [`Record::tags`].
    pub fn field_text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Url => self.url.as_deref(),
            Field::Category => self.category.as_deref(),
            Field::Tag => None,
        }
    }
}

/// Which part of a record produced a match.
///
/// Declaration order is the tie-break order when two fields produce the same
/// weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Url,
    Category,
    Tag,
}

impl Field {
    /// Single-valued fields, in tie-break order.
    pub const SCALAR: [Field; 3] = [Field::Title, Field::Url, Field::Category];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Url => "url",
            Field::Category => "category",
            Field::Tag => "tag",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record paired with its relevance score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredRecord<'a> {
    pub record: &'a Record,
    pub score: f64,
}

impl<'a> ScoredRecord<'a> {
    pub fn new(record: &'a Record, score: f64) -> Self {
        Self { record, score }
    }
}

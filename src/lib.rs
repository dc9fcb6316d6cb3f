// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant search and ranking for link and note collections.
//!
//! Given a free-text query and a slice of [`Record`]s, [`search`] returns the
//! matching records ordered by relevance. Matching tolerates typos, partial
//! words, and case or accent differences.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐     ┌─────────────┐
//! │  utils.rs   │────▶│   fuzzy/     │────▶│ scoring/core   │────▶│scoring/fields│
//! │ (normalize) │     │ (levenshtein)│     │ (fuzzy_score)  │     │(score_record)│
//! └─────────────┘     └──────────────┘     └────────────────┘     └──────┬──────┘
//!                                                                         │
//! ┌─────────────┐     ┌──────────────────┐                                ▼
//! │search/filter│────▶│    search        │◀──── scoring/ranking (compare_scored)
//! │(category,tag│     │ (orchestrator)   │
//! └─────────────┘     └──────────────────┘
//! ```
//!
//! Every call is independent and pure: nothing is cached, nothing is mutated.
//!
//! # Scoring at a glance
//!
//! | Tier        | Field score       |   | Field    | Weight |
//! |-------------|-------------------|---|----------|--------|
//! | Exact       | 1.0               |   | Title    | 1.2    |
//! | Substring   | 0.9               |   | Tag      | 1.1    |
//! | WordOverlap | ≤ 0.8             |   | Url      | 1.0    |
//! | Fallback    | < 0.6             |   | Category | 1.0    |
//!
//! A record scores its best weighted field, clamped to 1.0.
//!
//! # Usage
//!
//! ```
//! use linkfind::{search, Record};
//!
//! let records = vec![
//!     Record::new("Google")
//!         .with_url("https://google.com")
//!         .with_category("Personal")
//!         .with_tags(["search"]),
//!     Record::new("GitHub")
//!         .with_url("https://github.com")
//!         .with_category("Work")
//!         .with_tags(["code"]),
//! ];
//!
//! let results = search(&records, "git", "", "", 0.1);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].record.title.as_deref(), Some("GitHub"));
//! ```

// Module declarations
pub mod contracts;
mod fuzzy;
pub mod records;
mod scoring;
mod search;
mod taxonomy;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use fuzzy::levenshtein;
pub use records::LoadError;
pub use scoring::fields::{best_field, field_weight, score_record};
pub use scoring::ranking::{compare_scored, sort_results};
pub use scoring::{classify, fuzzy_score, fuzzy_score_normalized, MatchTier};
#[cfg(feature = "parallel")]
pub use search::search_parallel;
pub use search::{
    apply_filters, filter_by_category, filter_by_tag, search, search_with, SearchOptions,
    ALL_CATEGORIES, DEFAULT_THRESHOLD,
};
pub use taxonomy::{all_categories, all_tags, clean_tags};
pub use types::{Field, Record, ScoredRecord};
pub use utils::normalize;

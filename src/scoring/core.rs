// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind field similarity.
//!
//! A (query, text) pair is scored by walking down four tiers, from "certain
//! match" to "weak guess". The first tier that fires decides the score.
//!
//! # Key Invariant: Tier Dominance
//!
//! Each tier can never score above the tier before it:
//!
//! ```text
//! Exact (1.0) > Substring (0.9) > WordOverlap cap (0.8) > Fallback cap (0.6)
//! ```
//!
//! The fallback is a raw similarity in `(0.6, 1.0)` scaled by 0.6, so it lands
//! in `(0.36, 0.6)` and can never outrank a substring or word match. Typo
//! guesses must not displace confident matches.
//!
//! # Constants
//!
//! | Tier        | Score              | Condition                          |
//! |-------------|--------------------|------------------------------------|
//! | Exact       | 1.0                | normalized strings equal           |
//! | Substring   | 0.9                | query contained in text            |
//! | WordOverlap | min(0.8, m / n)    | some query word overlaps a word    |
//! | Fallback    | sim × 0.6          | edit similarity `sim` > 0.6        |
//!
//! Changing these requires updating the compile-time checks in `contracts`.

use crate::fuzzy::levenshtein;
use crate::utils::{char_len, normalize};

// =============================================================================
// TIER CONSTANTS
// =============================================================================

/// Score for an exact match after normalization.
pub const EXACT_SCORE: f64 = 1.0;

/// Score when the whole query appears inside the text.
pub const SUBSTRING_SCORE: f64 = 0.9;

/// Upper bound for word-overlap matches.
pub const WORD_OVERLAP_CAP: f64 = 0.8;

/// Increment for a query word equal to a text word.
pub const WORD_EXACT_INCREMENT: f64 = 1.0;

/// Increment for a query word that contains, or is contained in, a text word.
pub const WORD_PARTIAL_INCREMENT: f64 = 0.7;

/// Edit similarity must be strictly above this for the fallback to fire.
pub const FALLBACK_MIN_SIMILARITY: f64 = 0.6;

/// Multiplier applied to an accepted fallback similarity.
pub const FALLBACK_SCALE: f64 = 0.6;

/// Which tier produced a field score. Mostly useful for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact,
    Substring,
    WordOverlap,
    Fallback,
    None,
}

/// Similarity of `query` to `text` in `[0, 1]`.
///
/// Both inputs are normalized first (case, diacritics, whitespace), so
/// `fuzzy_score("cafe", "Café") == 1.0`.
///
/// # Examples
///
/// ```
/// use linkfind::fuzzy_score;
///
/// assert_eq!(fuzzy_score("Google", "google"), 1.0);
/// assert_eq!(fuzzy_score("git", "GitHub repository"), 0.9);
/// assert_eq!(fuzzy_score("xyz123", "Google"), 0.0);
/// ```
pub fn fuzzy_score(query: &str, text: &str) -> f64 {
    fuzzy_score_normalized(&normalize(query), &normalize(text))
}

/// [`fuzzy_score`] for inputs that are already normalized.
///
/// The record scorer normalizes the query once and reuses it for every field.
/// Passing non-normalized text here gives case- and accent-sensitive results.
pub fn fuzzy_score_normalized(query: &str, text: &str) -> f64 {
    classify_normalized(query, text).1
}

/// Score plus the tier that produced it.
pub fn classify(query: &str, text: &str) -> (MatchTier, f64) {
    classify_normalized(&normalize(query), &normalize(text))
}

fn classify_normalized(query: &str, text: &str) -> (MatchTier, f64) {
    if query.is_empty() || text.is_empty() {
        return (MatchTier::None, 0.0);
    }

    if query == text {
        return (MatchTier::Exact, EXACT_SCORE);
    }

    if text.contains(query) {
        return (MatchTier::Substring, SUBSTRING_SCORE);
    }

    if let Some(score) = word_overlap_score(query, text) {
        return (MatchTier::WordOverlap, score);
    }

    match fallback_score(query, text) {
        Some(score) => (MatchTier::Fallback, score),
        None => (MatchTier::None, 0.0),
    }
}

/// Word-overlap tier: `min(0.8, matches / query_words)`, or `None` if no
/// query word touches any text word.
///
/// Every (query word, text word) pair contributes independently, so one query
/// word matching several text words counts several times. The cap bounds the
/// result regardless.
fn word_overlap_score(query: &str, text: &str) -> Option<f64> {
    let query_words: Vec<&str> = query.split_whitespace().collect();
    let text_words: Vec<&str> = text.split_whitespace().collect();

    let mut matches = 0.0;
    for q in &query_words {
        for t in &text_words {
            if q == t {
                matches += WORD_EXACT_INCREMENT;
            } else if t.contains(q) || q.contains(t) {
                matches += WORD_PARTIAL_INCREMENT;
            }
        }
    }

    if matches > 0.0 {
        Some(WORD_OVERLAP_CAP.min(matches / query_words.len() as f64))
    } else {
        None
    }
}

/// Edit-distance tier: `similarity × 0.6` when `similarity > 0.6`.
fn fallback_score(query: &str, text: &str) -> Option<f64> {
    let longest = char_len(query).max(char_len(text));
    if longest == 0 {
        return None;
    }

    let distance = levenshtein(query, text);
    let similarity = 1.0 - distance as f64 / longest as f64;

    (similarity > FALLBACK_MIN_SIMILARITY).then_some(similarity * FALLBACK_SCALE)
}

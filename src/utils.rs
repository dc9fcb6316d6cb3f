// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables matching between ASCII and accented spellings:
/// - "Café" → "cafe"
/// - "Categoría de Trabajo" → "categoria de trabajo"
/// - "  TEXTO   CON   ESPACIOS  " → "texto con espacios"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Filter out combining marks
/// 4. Collapse whitespace runs and trim
///
/// Lowercasing happens before decomposition so that characters whose lowercase
/// form carries a combining mark (`İ` → `i̇`) lose it too. That ordering is what
/// makes `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of Unicode scalar values in a string.
///
/// Lengths used in similarity ratios count characters, not bytes, so "café"
/// and "cafe" have the same length after normalization.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

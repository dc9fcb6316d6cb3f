// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with a single rolling row.
//!
//! Classic Wagner-Fischer recurrence, but only one row of `len(b) + 1` cells is
//! kept alive. Swapping the inputs so that `b` is the shorter string bounds the
//! auxiliary space by `O(min(len(a), len(b)))`. The swap is a space trick only:
//! edit distance is symmetric, so the result does not change.

/// Minimum number of single-character insertions, deletions, or substitutions
/// that turn `a` into `b`.
///
/// Counts characters, not bytes, so `levenshtein("cafe", "café") == 1`.
///
/// Properties (checked by the property tests):
/// - `levenshtein(x, x) == 0`
/// - `levenshtein("", x) == len(x)`
/// - `levenshtein(a, b) == levenshtein(b, a)`
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();

    // Shorter string becomes the row dimension
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }

    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        // `diag` holds row[j] from the previous iteration (the substitution cell)
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diag + cost); // substitution
            diag = above;
        }
    }

    row[b.len()]
}

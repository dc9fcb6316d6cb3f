// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.

mod levenshtein;

pub use levenshtein::*;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Three layers: `core` scores one (query, text) pair through the similarity
//! tiers, `fields` turns those into a single weighted score per record, and
//! `ranking` orders the scored records.

mod core;
pub mod fields;
pub mod ranking;

pub use core::*;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading records from JSON.
//!
//! Accepts either a bare array of records or the link store's document shape,
//! an object with a `links` array:
//!
//! ```json
//! { "links": [ { "title": "GitHub", "url": "https://github.com", "tags": ["code"] } ] }
//! ```
//!
//! The link store itself writes Spanish keys (`titulo`, `categoria`,
//! `actualizado_en`); each is read as a fallback for its English counterpart,
//! so a store file loads as-is. An English key that is present wins.
//!
//! Field values are coerced rather than rejected: a `title` that is a number,
//! or `tags` that is a string, simply becomes absent. Only a document that is
//! not a list of objects at all is an error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::types::Record;

/// Key holding the record array in the link store's document shape.
pub const LINKS_KEY: &str = "links";

/// Accepted keys per text field, in lookup order.
const TITLE_KEYS: &[&str] = &["title", "titulo"];
const URL_KEYS: &[&str] = &["url"];
const CATEGORY_KEYS: &[&str] = &["category", "categoria"];
const UPDATED_AT_KEYS: &[&str] = &["updated_at", "actualizado_en"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected document shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Parse records from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<Record>> {
    from_value(serde_json::from_str(json)?)
}

/// Parse records from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    from_value(serde_json::from_reader(reader)?)
}

/// Parse records from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = File::open(path.as_ref())?;
    from_reader(BufReader::new(file))
}

/// Convert an already-parsed JSON document into records.
pub fn from_value(value: Value) -> Result<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(LINKS_KEY) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(LoadError::Shape(format!(
                    "`{}` is {}, expected an array",
                    LINKS_KEY,
                    kind(&other)
                )))
            }
            None => {
                return Err(LoadError::Shape(format!(
                    "object has no `{}` array",
                    LINKS_KEY
                )))
            }
        },
        other => {
            return Err(LoadError::Shape(format!(
                "document is {}, expected an array of records",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(record_from_map(index, &map)),
            other => Err(LoadError::Shape(format!(
                "record {} is {}, expected an object",
                index,
                kind(&other)
            ))),
        })
        .collect()
}

fn record_from_map(index: usize, map: &Map<String, Value>) -> Record {
    Record {
        title: text_field(index, map, TITLE_KEYS),
        url: text_field(index, map, URL_KEYS),
        category: text_field(index, map, CATEGORY_KEYS),
        tags: tag_list(index, map),
        updated_at: text_field(index, map, UPDATED_AT_KEYS),
    }
}

/// The first of `keys` holding a non-null value decides the field.
fn text_field(index: usize, map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let (key, value) = keys
        .iter()
        .find_map(|&key| map.get(key).filter(|v| !v.is_null()).map(|v| (key, v)))?;
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => {
            debug!(index, field = key, found = kind(other), "ignoring non-string field");
            None
        }
    }
}

fn tag_list(index: usize, map: &Map<String, Value>) -> Vec<String> {
    match map.get("tags") {
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(|tag| match tag {
                Value::String(text) => Some(text.clone()),
                other => {
                    debug!(index, found = kind(other), "dropping non-string tag");
                    None
                }
            })
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            debug!(index, found = kind(other), "ignoring non-array tags");
            Vec::new()
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

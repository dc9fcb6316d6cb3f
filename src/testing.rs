//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating record literals.

#![doc(hidden)]

use crate::types::Record;

/// Create a record with a title and an `updated_at` timestamp.
pub fn make_record(title: &str, updated_at: &str) -> Record {
    Record::new(title).with_updated_at(updated_at)
}

/// Create a fully populated link record.
pub fn make_link(title: &str, url: &str, category: &str, tags: &[&str]) -> Record {
    Record::new(title)
        .with_url(url)
        .with_category(category)
        .with_tags(tags.iter().copied())
}

/// The two-record collection used throughout the docs:
/// Google (Personal, `search`) and GitHub (Work, `code`).
pub fn sample_records() -> Vec<Record> {
    vec![
        make_link("Google", "https://google.com", "Personal", &["search"]),
        make_link("GitHub", "https://github.com", "Work", &["code"]),
    ]
}

/// A larger, realistic bookmark collection with timestamps, accents, and
/// overlapping vocabulary.
pub fn bookmark_records() -> Vec<Record> {
    vec![
        make_link("Google", "https://google.com", "Personal", &["search"])
            .with_updated_at("2024-01-10T08:00:00"),
        make_link("GitHub", "https://github.com", "Work", &["code", "git"])
            .with_updated_at("2024-03-02T12:30:00"),
        make_link("GitLab", "https://gitlab.com", "Work", &["code", "ci"])
            .with_updated_at("2024-02-14T09:15:00"),
        make_link(
            "Rust Book",
            "https://doc.rust-lang.org/book/",
            "Documentación",
            &["rust", "Lectura"],
        )
        .with_updated_at("2023-11-20T18:45:00"),
        make_link(
            "Café del Mar",
            "https://cafedelmar.example",
            "Música",
            &["chill"],
        )
        .with_updated_at("2022-07-01T21:00:00"),
        make_link("Hacker News", "https://news.ycombinator.com", "Noticias", &["tech", "news"])
            .with_updated_at("2024-03-01T07:00:00"),
        Record::new("Untitled scratch"),
    ]
}

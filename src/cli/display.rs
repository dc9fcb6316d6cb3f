// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the linkfind CLI.
//!
//! Result rows use a fixed OneDark palette. `NO_COLOR` and non-TTY stdout turn
//! colors off, so piped output stays plain.

use linkfind::{Field, ScoredRecord};

/// Widest title column before truncation.
pub const TITLE_WIDTH: usize = 36;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// OneDark, as 24-bit foreground escapes
const GREEN: &str = "\x1b[38;2;152;195;121m";
const BRIGHT_GREEN: &str = "\x1b[38;2;166;226;46m";
const YELLOW: &str = "\x1b[38;2;229;192;123m";
const BLUE: &str = "\x1b[38;2;97;175;239m";
const MAGENTA: &str = "\x1b[38;2;198;120;221m";
const CYAN: &str = "\x1b[38;2;86;182;194m";
const GRAY: &str = "\x1b[38;2;92;99;112m";

/// Colors are on unless `NO_COLOR` is set or stdout is not a terminal.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in `color` plus `modifiers` when colors are on.
fn paint(color: &str, modifiers: &str, text: &str) -> String {
    if use_colors() {
        format!("{modifiers}{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Pad plain `text` to `width` chars, then paint it.
///
/// Padding before painting keeps escape codes out of the width count.
fn column(color: &str, modifiers: &str, text: &str, width: usize) -> String {
    paint(color, modifiers, &format!("{text:<width$}"))
}

/// Truncate to `max_chars` characters, marking the cut with `…`
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn score_color(score: f64) -> &'static str {
    match score {
        s if s >= 0.9 => BRIGHT_GREEN,
        s if s >= 0.6 => GREEN,
        s if s >= 0.3 => YELLOW,
        _ => GRAY,
    }
}

fn field_color(field: Option<Field>) -> &'static str {
    match field {
        Some(Field::Title) => BRIGHT_GREEN,
        Some(Field::Tag) => MAGENTA,
        Some(Field::Url) => BLUE,
        Some(Field::Category) => CYAN,
        None => GRAY,
    }
}

/// Plain-text columns of one result row: score, field, title, then colored
/// extras (url, category, tags).
type RowText = (String, &'static str, String, Vec<(&'static str, String)>);

fn row_text(result: &ScoredRecord<'_>, field: Option<Field>) -> RowText {
    let record = result.record;
    let title = truncate(record.title.as_deref().unwrap_or("(untitled)"), TITLE_WIDTH);

    let mut extras = Vec::new();
    if let Some(url) = record.url.as_deref() {
        extras.push((BLUE, url.to_string()));
    }
    if let Some(category) = record.category.as_deref() {
        extras.push((CYAN, format!("[{category}]")));
    }
    if !record.tags.is_empty() {
        let tags: Vec<String> = record.tags.iter().map(|t| format!("#{t}")).collect();
        extras.push((GRAY, tags.join(" ")));
    }

    (
        format!("{:>5.2}", result.score),
        field.map_or("-", Field::as_str),
        title,
        extras,
    )
}

/// Print one ranked result: rank, score, field, title, url, category, tags.
pub fn result_row(rank: usize, result: &ScoredRecord<'_>, field: Option<Field>) {
    let (score, label, title, extras) = row_text(result, field);
    let mut line = format!(
        "{:>3}  {}  {}  {}",
        rank,
        paint(score_color(result.score), "", &score),
        column(field_color(field), if field.is_none() { DIM } else { "" }, label, 8),
        column(YELLOW, BOLD, &title, TITLE_WIDTH),
    );
    for (color, text) in extras {
        line.push_str("  ");
        line.push_str(&paint(color, "", &text));
    }
    println!("{}", line.trim_end());
}

/// Print a dimmed summary line
pub fn summary(text: &str) {
    println!("{}", paint(GRAY, DIM, text));
}

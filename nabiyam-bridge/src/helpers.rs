//! Shared utility functions.
//!
//! Zero terminal dependencies. Used by both view and update.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use textwrap::{Options, WordSeparator, WrapAlgorithm};

// ────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────

pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%H:%M").to_string()
}

/// Wrap `text` so no line is wider than `width` terminal columns.
///
/// Existing newlines are kept, blank lines included. Width is measured in
/// display columns, so Hangul and emoji count as two. Breaks happen at
/// spaces; a word wider than the line is split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        out.extend(textwrap::wrap(line, &options).into_iter().map(|l| l.into_owned()));
    }
    out
}

/// Body width left after the message gutter, never below 10.
pub fn body_width(term_cols: u16, gutter: usize) -> usize {
    (term_cols as usize).saturating_sub(gutter).max(10)
}

//! Structural classification of template lines.
//!
//! The `.lang` format contract is three tokens: `^\S+\s*=` starts an entry,
//! a trailing `\` continues the value onto the next physical line, and `#`
//! starts a comment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static ENTRY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+\s*=").expect("valid regex"));

const COMMENT_PREFIX: char = '#';
const CONTINUATION_MARKER: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Blank,
    Comment,
    Entry,
    Other,
}

/// Classify a physical line, returning the entry key for entry lines.
pub fn classify(line: &str) -> (LineKind, Option<&str>) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (LineKind::Blank, None);
    }
    if trimmed.starts_with(COMMENT_PREFIX) {
        return (LineKind::Comment, None);
    }
    match entry_key(line) {
        Some(key) => (LineKind::Entry, Some(key)),
        None => (LineKind::Other, None),
    }
}

/// Key of an entry line: the text before the first `=`, trimmed.
///
/// Leading whitespace disqualifies a line, as does an empty key (`==x`).
pub fn entry_key(line: &str) -> Option<&str> {
    if !ENTRY_LINE.is_match(line) {
        return None;
    }
    let eq = line.find('=')?;
    let key = line[..eq].trim();
    (!key.is_empty()).then_some(key)
}

/// Whether the value on `line` continues onto the next physical line.
pub fn continues(line: &str) -> bool {
    line.trim().ends_with(CONTINUATION_MARKER)
}

/// Split text into physical lines, accepting both LF and CRLF endings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
}

// src/scoring.rs
//! Line classification and the size-proxy complexity score.
//!
//! This is not a structural metric: no control flow is inspected. A line is
//! blank, a comment (trimmed text starts with a comment leader), or code.

use crate::constants::COMMENT_LEADERS;
use crate::types::{DegradeReason, FileStats, Outcome};
use std::fs;
use std::path::Path;

/// Reads `path` and counts its lines.
///
/// Invalid UTF-8 is replaced, never rejected. A file that cannot be read
/// yields zeroed stats marked [`DegradeReason::Unreadable`].
#[must_use]
pub fn score(path: &Path) -> Outcome<FileStats> {
    match fs::read(path) {
        Ok(bytes) => Outcome::Ok(classify(&String::from_utf8_lossy(&bytes))),
        Err(e) => {
            log::debug!("Cannot score {}: {e}", path.display());
            Outcome::degraded(FileStats::default(), DegradeReason::Unreadable(e.to_string()))
        }
    }
}

/// Counts blank, comment and code lines in `text`.
#[must_use]
pub fn classify(text: &str) -> FileStats {
    let mut stats = FileStats::default();
    for line in text.lines() {
        stats.lines_total += 1;
        match LineKind::of(line) {
            LineKind::Blank => stats.blank_lines += 1,
            LineKind::Comment => stats.comment_lines += 1,
            LineKind::Code => stats.lines_code += 1,
        }
    }
    stats.complexity_score = stats.lines_code + stats.comment_lines;
    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Code,
}

impl LineKind {
    fn of(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Blank
        } else if COMMENT_LEADERS.iter().any(|l| trimmed.starts_with(l)) {
            Self::Comment
        } else {
            Self::Code
        }
    }
}

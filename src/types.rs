// src/types.rs
use std::fmt;

/// A source file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the scan root, always `/`-separated.
    pub relative_path: String,
    pub size_bytes: u64,
}

impl FileRecord {
    #[must_use]
    pub fn new(relative_path: impl Into<String>, size_bytes: u64) -> Self {
        Self { relative_path: relative_path.into(), size_bytes }
    }

    /// File size in kibibytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Line counts for a single file.
///
/// Every line lands in exactly one of the code, comment or blank buckets,
/// so `lines_total == lines_code + comment_lines + blank_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines_total: usize,
    pub lines_code: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub complexity_score: usize,
}

/// How often a path was touched inside the lookback window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub relative_path: String,
    pub change_count: usize,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(relative_path: impl Into<String>, change_count: usize) -> Self {
        Self { relative_path: relative_path.into(), change_count }
    }
}

/// One line of the ranked hotspot table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub rank: usize,
    pub path: String,
    pub lines_code: usize,
    pub comment_lines: usize,
    pub size_kb: f64,
    pub risk_score: i64,
    /// False when the file could not be read at scoring time.
    pub scored: bool,
}

/// Why a stage fell back to a default value instead of a real measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// File vanished or could not be opened between discovery and scoring.
    Unreadable(String),
    /// The version-control binary is not installed or not on `PATH`.
    ToolMissing(String),
    /// The scan root is not inside a repository.
    NotARepository,
    /// The version-control command ran but exited unsuccessfully.
    CommandFailed(String),
    /// The version-control command produced output we could not decode.
    InvalidOutput,
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(msg) => write!(f, "unreadable: {msg}"),
            Self::ToolMissing(tool) => write!(f, "{tool} not found"),
            Self::NotARepository => write!(f, "not a git repository"),
            Self::CommandFailed(msg) => write!(f, "command failed: {msg}"),
            Self::InvalidOutput => write!(f, "command output was not valid UTF-8"),
        }
    }
}

/// Result of a stage that never aborts the pipeline.
///
/// Fatal failures travel separately as `Err(DevPainError)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    Degraded { value: T, reason: DegradeReason },
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn degraded(value: T, reason: DegradeReason) -> Self {
        Self::Degraded { value, reason }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Self::Ok(value) | Self::Degraded { value, .. } => value,
        }
    }

    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) | Self::Degraded { value, .. } => value,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            Self::Ok(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Splits into the value and the optional degrade reason.
    #[must_use]
    pub fn into_parts(self) -> (T, Option<DegradeReason>) {
        match self {
            Self::Ok(value) => (value, None),
            Self::Degraded { value, reason } => (value, Some(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_kb() {
        assert!((FileRecord::new("a.py", 5120).size_kb() - 5.0).abs() < f64::EPSILON);
        assert!(FileRecord::new("empty.py", 0).size_kb().abs() < f64::EPSILON);
    }

    #[test]
    fn test_outcome_parts() {
        let ok: Outcome<u8> = Outcome::Ok(3);
        assert_eq!(ok.reason(), None);
        assert!(!ok.is_degraded());

        let bad = Outcome::degraded(0u8, DegradeReason::NotARepository);
        assert!(bad.is_degraded());
        assert_eq!(*bad.value(), 0);
        assert_eq!(bad.into_parts(), (0, Some(DegradeReason::NotARepository)));
    }
}

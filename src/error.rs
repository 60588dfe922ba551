// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevPainError {
    #[error("failed to write report {}: {source}", path.display())]
    ReportWrite {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Report formatting failed: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl DevPainError {
    /// True when the failure happened while writing the final report.
    #[must_use]
    pub fn is_report_write(&self) -> bool {
        matches!(self, Self::ReportWrite { .. })
    }
}

pub type Result<T> = std::result::Result<T, DevPainError>;

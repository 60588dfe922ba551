// src/reporting.rs
//! Ranked hotspot rows and the markdown report built from them.

pub mod markdown;
pub mod rows;

pub use markdown::{render_markdown, write_report, HistorySection, ReportInput};
pub use rows::{build_rows, risk_score, score_under};

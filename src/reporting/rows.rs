// src/reporting/rows.rs
use crate::constants::{COMPLEXITY_WEIGHT, SIZE_KB_DIVISOR};
use crate::scoring;
use crate::types::{FileRecord, FileStats, Outcome, ReportRow};
use std::path::Path;

/// `round(complexity_score * 1.2 + size_kb / 10)`, rounding half away from zero.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn risk_score(stats: &FileStats, size_bytes: u64) -> i64 {
    let size_kb = size_bytes as f64 / 1024.0;
    let raw = stats.complexity_score as f64 * COMPLEXITY_WEIGHT + size_kb / SIZE_KB_DIVISOR;
    raw.round() as i64
}

/// Scorer that resolves each record against the scan root.
pub fn score_under(root: &Path) -> impl Fn(&FileRecord) -> Outcome<FileStats> + '_ {
    move |record| scoring::score(&root.join(&record.relative_path))
}

/// Scores every record and ranks them by descending risk.
///
/// Produces exactly one row per record. The sort is stable, so equal scores
/// keep discovery order.
pub fn build_rows<F>(files: &[FileRecord], score: F) -> Vec<ReportRow>
where
    F: Fn(&FileRecord) -> Outcome<FileStats>,
{
    let mut rows: Vec<ReportRow> = files
        .iter()
        .map(|record| {
            let outcome = score(record);
            let scored = !outcome.is_degraded();
            let stats = outcome.into_value();
            ReportRow {
                rank: 0,
                path: record.relative_path.clone(),
                lines_code: stats.lines_code,
                comment_lines: stats.comment_lines,
                size_kb: record.size_kb(),
                risk_score: risk_score(&stats, record.size_bytes),
                scored,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

// src/pipeline.rs
//! discover → (history) → score → rank → render → write.

use crate::config::ScanConfig;
use crate::discovery;
use crate::error::Result;
use crate::history::ChangeHistory;
use crate::reporting::{self, HistorySection, ReportInput};
use crate::types::{DegradeReason, ReportRow};
use std::path::PathBuf;

/// Stage notifications for console output.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Discovered { files: usize, skipped: usize, truncated: bool },
    History { entries: usize, reason: Option<&'a DegradeReason> },
    Scored { files: usize, unscorable: usize },
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub files: usize,
    pub unscorable: usize,
    pub skipped: usize,
    pub truncated: bool,
    /// `None` when history was not requested.
    pub history: Option<HistorySection>,
    pub top: Option<ReportRow>,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Discovery found nothing eligible; no report was written.
    NothingFound { skipped: usize },
    Written(RunSummary),
}

/// Runs one scan with `config`.
///
/// # Errors
/// Returns error only if the report cannot be rendered or written. Walk,
/// read and history failures are absorbed and surface in the summary.
pub fn run<F>(
    config: &ScanConfig,
    history: &dyn ChangeHistory,
    generated_at: &str,
    mut on_progress: F,
) -> Result<RunOutcome>
where
    F: FnMut(Progress<'_>),
{
    let found = discovery::discover(config);
    on_progress(Progress::Discovered {
        files: found.files.len(),
        skipped: found.skipped,
        truncated: found.truncated,
    });
    if found.files.is_empty() {
        return Ok(RunOutcome::NothingFound { skipped: found.skipped });
    }

    let history_section = config.include_history.then(|| {
        let (entries, reason) = history
            .change_frequency(
                &config.root,
                config.lookback_days,
                &config.history_extensions,
                config.history_top,
            )
            .into_parts();
        HistorySection { entries, reason }
    });
    if let Some(section) = &history_section {
        on_progress(Progress::History {
            entries: section.entries.len(),
            reason: section.reason.as_ref(),
        });
    }

    let rows = reporting::build_rows(&found.files, reporting::score_under(&config.root));
    let input = ReportInput {
        mode: config.mode,
        folder: &config.root,
        generated_at,
        rows: &rows,
        history: history_section.as_ref(),
        skipped: found.skipped,
        truncated: found.truncated,
    };
    let unscorable = input.unscorable();
    on_progress(Progress::Scored { files: rows.len(), unscorable });

    let markdown = reporting::render_markdown(&input)?;
    reporting::write_report(&config.output_path, &markdown)?;
    log::info!("Report written to {}", config.output_path.display());

    Ok(RunOutcome::Written(RunSummary {
        report_path: config.output_path.clone(),
        files: rows.len(),
        unscorable,
        skipped: found.skipped,
        truncated: found.truncated,
        top: rows.first().cloned(),
        history: history_section,
    }))
}

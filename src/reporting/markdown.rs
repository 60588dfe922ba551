// src/reporting/markdown.rs
use crate::config::Mode;
use crate::error::{DevPainError, Result};
use crate::types::{DegradeReason, HistoryEntry, ReportRow};
use std::collections::HashMap;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Change counts as returned by the history source, plus why they are
/// missing when the source degraded.
#[derive(Debug, Clone, Default)]
pub struct HistorySection {
    pub entries: Vec<HistoryEntry>,
    pub reason: Option<DegradeReason>,
}

/// Everything the renderer needs for one document.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub mode: Mode,
    pub folder: &'a Path,
    pub generated_at: &'a str,
    pub rows: &'a [ReportRow],
    /// `Some` only when history was requested.
    pub history: Option<&'a HistorySection>,
    pub skipped: usize,
    pub truncated: bool,
}

impl ReportInput<'_> {
    #[must_use]
    pub fn unscorable(&self) -> usize {
        self.rows.iter().filter(|r| !r.scored).count()
    }
}

/// Renders the full markdown report.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_markdown(input: &ReportInput<'_>) -> Result<String> {
    let mut out = String::new();
    write_header(&mut out, input)?;
    if let Some(history) = input.history {
        write_history(&mut out, history)?;
    }
    write_ranking(&mut out, input)?;
    write_explanation(&mut out)?;
    Ok(out)
}

/// Writes the report as UTF-8. This is the one failure the pipeline never
/// swallows.
///
/// # Errors
/// Returns [`DevPainError::ReportWrite`] if the destination is not writable.
pub fn write_report(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).map_err(|source| DevPainError::ReportWrite {
        source,
        path: path.to_path_buf(),
    })
}

fn title(mode: Mode) -> &'static str {
    match mode {
        Mode::Full => "# 🚨 DevPain Report - Technical Debt Analysis",
        Mode::Tests => "# 🧪 DevPain Test Files Report",
        Mode::History => "# 🚨 DevPain v2 Report - Git History + File Analysis",
    }
}

fn write_header(out: &mut String, input: &ReportInput<'_>) -> Result<()> {
    writeln!(out, "{}", title(input.mode))?;
    writeln!(out)?;
    writeln!(out, "- **Folder**: {}", code_span(&input.folder.display().to_string()))?;
    writeln!(out, "- **Generated**: {}", input.generated_at)?;
    writeln!(out, "- **Files analyzed**: {}", input.rows.len())?;

    let unscorable = input.unscorable();
    if unscorable > 0 {
        writeln!(out, "- **Unreadable files**: {unscorable} (shown as `n/a`, not scored)")?;
    }
    if input.skipped > 0 {
        writeln!(out, "- **Skipped entries**: {}", input.skipped)?;
    }
    if input.truncated {
        writeln!(out, "- **File cap reached**: only the first {} files were analyzed", input.rows.len())?;
    }
    if let Some(history) = input.history {
        writeln!(out, "- **Files with git history**: {}", history.entries.len())?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_history(out: &mut String, history: &HistorySection) -> Result<()> {
    writeln!(out, "## 🕓 Git Hotspots (Most Changed Files)")?;
    writeln!(out)?;
    writeln!(out, "| File | Changes |")?;
    writeln!(out, "|------|---------|")?;
    if history.entries.is_empty() {
        writeln!(out, "| No git history found | - |")?;
    }
    for entry in &history.entries {
        writeln!(out, "| {} | {} |", path_cell(&entry.relative_path), entry.change_count)?;
    }
    if let Some(reason) = &history.reason {
        writeln!(out)?;
        writeln!(out, "> History unavailable: {reason}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_ranking(out: &mut String, input: &ReportInput<'_>) -> Result<()> {
    let changes: Option<HashMap<&str, usize>> = input.history.map(|h| {
        h.entries
            .iter()
            .map(|e| (e.relative_path.as_str(), e.change_count))
            .collect()
    });

    writeln!(out, "## 🔥 Top Files by Complexity")?;
    writeln!(out)?;
    if changes.is_some() {
        writeln!(out, "| Rank | File | LOC | Comments | Size (KB) | Risk Score | Changes |")?;
        writeln!(out, "|------|------|-----|----------|-----------|------------|---------|")?;
    } else {
        writeln!(out, "| Rank | File | LOC | Comments | Size (KB) | Risk Score |")?;
        writeln!(out, "|------|------|-----|----------|-----------|------------|")?;
    }

    for row in input.rows {
        write!(out, "{}", format_row(row))?;
        if let Some(changes) = &changes {
            match changes.get(row.path.as_str()) {
                Some(count) => write!(out, " {count} |")?,
                None => write!(out, " - |")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn format_row(row: &ReportRow) -> String {
    let path = path_cell(&row.path);
    if row.scored {
        format!(
            "| {} | {path} | {} | {} | {:.1} | {} |",
            row.rank, row.lines_code, row.comment_lines, row.size_kb, row.risk_score
        )
    } else {
        format!(
            "| {} | {path} ⚠ unreadable | n/a | n/a | {:.1} | {} |",
            row.rank, row.size_kb, row.risk_score
        )
    }
}

fn write_explanation(out: &mut String) -> Result<()> {
    writeln!(out, "## 📊 Risk Score Explanation")?;
    writeln!(out)?;
    writeln!(out, "- **Risk Score** = round((LOC + Comments) × 1.2 + Size (KB) ÷ 10)")?;
    writeln!(out, "- **Higher score** = higher maintenance risk")?;
    writeln!(out, "- **Target these files first** for refactoring")?;
    writeln!(out)?;
    writeln!(out, "## 🎯 Next Actions")?;
    writeln!(out)?;
    writeln!(out, "- Review top 5 files for refactoring opportunities")?;
    writeln!(out, "- Add tests for files with high comment ratios")?;
    writeln!(out, "- Consider extracting complex functions into modules")?;
    writeln!(out)?;
    writeln!(out, "*Run this weekly to track technical debt growth.*")?;
    Ok(())
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Wraps `text` in a code span whose fence is longer than any backtick run
/// inside it.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if longest == 0 {
        format!("{fence}{text}{fence}")
    } else {
        format!("{fence} {text} {fence}")
    }
}

fn path_cell(path: &str) -> String {
    escape_cell(&code_span(path))
}

// src/history.rs
//! Change frequency from version control.
//!
//! History is optional: every failure degrades to an empty list so the
//! report can still be written.

use crate::config::has_suffix;
use crate::types::{DegradeReason, HistoryEntry, Outcome};
use chrono::{Duration, Local, NaiveDate};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Source of per-file change counts over a trailing window.
pub trait ChangeHistory {
    /// Returns the `top` most-changed paths ending in one of `extensions`,
    /// most changed first.
    fn change_frequency(
        &self,
        root: &Path,
        lookback_days: u32,
        extensions: &[String],
        top: usize,
    ) -> Outcome<Vec<HistoryEntry>>;
}

/// Used by modes that never look at history.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl ChangeHistory for NoHistory {
    fn change_frequency(&self, _: &Path, _: u32, _: &[String], _: usize) -> Outcome<Vec<HistoryEntry>> {
        Outcome::Ok(Vec::new())
    }
}

/// Reads history with `git log --name-only`.
#[derive(Debug, Clone)]
pub struct GitHistory {
    program: String,
    today: NaiveDate,
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHistory {
    #[must_use]
    pub fn new() -> Self {
        Self { program: "git".to_string(), today: Local::now().date_naive() }
    }

    /// Uses a different executable name. Mainly for exercising the
    /// missing-tool path.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Pins the date the lookback window is measured from.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn run_log(&self, root: &Path, since: &str) -> Result<String, DegradeReason> {
        let since_arg = format!("--since={since}");
        let output = Command::new(&self.program)
            .args(["-c", "core.quotePath=false", "log", since_arg.as_str()])
            .args(["--relative", "--name-only", "--pretty=format:"])
            .current_dir(root)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DegradeReason::ToolMissing(self.program.clone()),
                _ => DegradeReason::CommandFailed(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Err(DegradeReason::NotARepository);
            }
            return Err(DegradeReason::CommandFailed(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout).map_err(|_| DegradeReason::InvalidOutput)
    }
}

impl ChangeHistory for GitHistory {
    fn change_frequency(
        &self,
        root: &Path,
        lookback_days: u32,
        extensions: &[String],
        top: usize,
    ) -> Outcome<Vec<HistoryEntry>> {
        let since = since_date(self.today, lookback_days);
        match self.run_log(root, &since) {
            Ok(log) => Outcome::Ok(tally_touched_paths(&log, extensions, top)),
            Err(reason) => {
                log::warn!("Skipping git history: {reason}");
                Outcome::degraded(Vec::new(), reason)
            }
        }
    }
}

/// `today - days`, formatted for `git log --since`. Windows reaching past
/// 1970-01-01 are clamped to that date.
#[must_use]
pub fn since_date(today: NaiveDate, days: u32) -> String {
    let floor = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    today
        .checked_sub_signed(Duration::days(i64::from(days)))
        .filter(|since| *since >= floor)
        .unwrap_or(floor)
        .format("%Y-%m-%d")
        .to_string()
}

/// Counts how often each path appears in `--name-only` log output.
///
/// Ties keep the order in which paths first appeared.
#[must_use]
pub fn tally_touched_paths(log: &str, extensions: &[String], top: usize) -> Vec<HistoryEntry> {
    let mut order: Vec<HistoryEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for path in log.lines().map(str::trim) {
        if path.is_empty() || !has_suffix(path, extensions) {
            continue;
        }
        match index.get(path) {
            Some(&i) => order[i].change_count += 1,
            None => {
                index.insert(path, order.len());
                order.push(HistoryEntry::new(path, 1));
            }
        }
    }

    order.sort_by(|a, b| b.change_count.cmp(&a.change_count));
    order.truncate(top);
    order
}

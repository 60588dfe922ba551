// src/config/types.rs
use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;

/// Which report the run produces. Each mode is a preset of [`ScanConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Rank every code file by size and comment density.
    #[default]
    Full,
    /// Rank only Python test files.
    Tests,
    /// Full ranking plus git change frequency over the lookback window.
    History,
}

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub mode: Mode,
    pub root: PathBuf,
    /// Case-sensitive file name suffixes, e.g. `.py`.
    pub extensions: Vec<String>,
    /// Suffixes counted when tallying the change log.
    pub history_extensions: Vec<String>,
    pub max_files: usize,
    pub lookback_days: u32,
    pub include_history: bool,
    pub history_top: usize,
    pub output_path: PathBuf,
    /// Case-insensitive substring the file name must contain.
    pub name_filter: Option<String>,
    /// Matched against the `/`-separated relative path.
    pub exclude_patterns: Vec<Regex>,
}

/// On-disk shape of `devpain.toml`. Unknown keys are a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevPainToml {
    #[serde(default)]
    pub scan: ScanSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    pub extensions: Option<Vec<String>>,
    pub history_extensions: Option<Vec<String>>,
    pub max_files: Option<usize>,
    pub lookback_days: Option<u32>,
    pub history_top: Option<usize>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{DevPainToml, Mode, ScanConfig, ScanSection};

use crate::constants::{
    DEFAULT_HISTORY_TOP, DEFAULT_LOOKBACK_DAYS, DEFAULT_MAX_FILES, FULL_EXTENSIONS,
    FULL_REPORT_FILE, HISTORY_LOG_EXTENSIONS, HISTORY_MAX_FILES, HISTORY_REPORT_FILE,
    HISTORY_SCAN_EXTENSIONS, TEST_EXTENSIONS, TEST_NAME_FILTER, TEST_REPORT_FILE,
};
use crate::error::Result;
use std::path::{Path, PathBuf};

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Mode {
    /// Fixed report file name for this mode.
    #[must_use]
    pub fn report_file(self) -> &'static str {
        match self {
            Self::Full => FULL_REPORT_FILE,
            Self::Tests => TEST_REPORT_FILE,
            Self::History => HISTORY_REPORT_FILE,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "full scan",
            Self::Tests => "test-file scan",
            Self::History => "git-augmented scan",
        }
    }
}

impl ScanConfig {
    /// Builds the preset for `mode`, rooted at `root`.
    #[must_use]
    pub fn for_mode(mode: Mode, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output_path = root.join(mode.report_file());
        let base = Self {
            mode,
            root,
            extensions: owned(FULL_EXTENSIONS),
            history_extensions: owned(HISTORY_LOG_EXTENSIONS),
            max_files: DEFAULT_MAX_FILES,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            include_history: false,
            history_top: DEFAULT_HISTORY_TOP,
            output_path,
            name_filter: None,
            exclude_patterns: Vec::new(),
        };

        match mode {
            Mode::Full => base,
            Mode::Tests => Self {
                extensions: owned(TEST_EXTENSIONS),
                name_filter: Some(TEST_NAME_FILTER.to_string()),
                ..base
            },
            Mode::History => Self {
                extensions: owned(HISTORY_SCAN_EXTENSIONS),
                max_files: HISTORY_MAX_FILES,
                include_history: true,
                ..base
            },
        }
    }

    /// Builds the preset and layers `devpain.toml` from `root` on top.
    ///
    /// # Errors
    /// Returns error if an exclude pattern in the config file is not a valid regex.
    pub fn load(mode: Mode, root: &Path) -> Result<Self> {
        let mut config = Self::for_mode(mode, root);
        if let Some(file) = io::read_config_file(root) {
            config.apply_toml(&file)?;
        }
        Ok(config)
    }

    /// Applies overrides from a parsed `devpain.toml`.
    ///
    /// # Errors
    /// Returns error if an exclude pattern is not a valid regex.
    pub fn apply_toml(&mut self, file: &DevPainToml) -> Result<()> {
        io::apply_scan_section(self, &file.scan)
    }
}

/// Case-sensitive suffix match against an extension list.
#[must_use]
pub fn has_suffix(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let full = ScanConfig::for_mode(Mode::Full, ".");
        assert_eq!(full.max_files, 50);
        assert!(!full.include_history);
        assert_eq!(full.output_path, Path::new(".").join("devpain_report.md"));

        let tests = ScanConfig::for_mode(Mode::Tests, ".");
        assert_eq!(tests.extensions, vec![".py".to_string()]);
        assert_eq!(tests.name_filter.as_deref(), Some("test"));

        let history = ScanConfig::for_mode(Mode::History, ".");
        assert_eq!(history.max_files, 20);
        assert_eq!(history.lookback_days, 180);
        assert!(history.include_history);
        assert!(!history.history_extensions.contains(&".html".to_string()));
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let config = ScanConfig::for_mode(Mode::Full, ".");
        assert!(has_suffix("main.py", &config.extensions));
        assert!(!has_suffix("MAIN.PY", &config.extensions));
        assert!(!has_suffix("notes.txt", &config.extensions));
    }
}

// src/constants.rs

/// Extensions scanned by the full report.
pub const FULL_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".java", ".cs", ".go", ".rb", ".cpp", ".c", ".h", ".html", ".css",
];

/// Extensions scanned by the history-augmented report.
pub const HISTORY_SCAN_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".ts", ".go", ".rb", ".cpp", ".c", ".html", ".css",
];

/// Extensions counted in the git change log. Markup files are not counted.
pub const HISTORY_LOG_EXTENSIONS: &[&str] =
    &[".py", ".js", ".java", ".ts", ".go", ".rb", ".cpp", ".c"];

pub const TEST_EXTENSIONS: &[&str] = &[".py"];

/// Case-insensitive substring a file name needs in test mode.
pub const TEST_NAME_FILTER: &str = "test";

pub const COMMENT_LEADERS: &[&str] = &["#", "//", "/*"];

pub const FULL_REPORT_FILE: &str = "devpain_report.md";
pub const TEST_REPORT_FILE: &str = "test_report.md";
pub const HISTORY_REPORT_FILE: &str = "v2_devpain_report.md";

pub const CONFIG_FILE: &str = "devpain.toml";

pub const DEFAULT_MAX_FILES: usize = 50;
pub const HISTORY_MAX_FILES: usize = 20;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 180;
pub const DEFAULT_HISTORY_TOP: usize = 20;

pub const COMPLEXITY_WEIGHT: f64 = 1.2;
/// Divisor applied to the size in KB before it joins the risk score.
pub const SIZE_KB_DIVISOR: f64 = 10.0;

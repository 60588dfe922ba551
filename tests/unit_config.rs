// tests/unit_config.rs
use devpain_core::config::{Mode, ScanConfig};
use devpain_core::error::DevPainError;
use std::fs;

#[test]
fn test_no_config_file_uses_preset() {
    let d = tempfile::tempdir().unwrap();
    let c = ScanConfig::load(Mode::History, d.path()).unwrap();
    assert_eq!(c.max_files, 20);
    assert_eq!(c.lookback_days, 180);
    assert_eq!(c.output_path, d.path().join("v2_devpain_report.md"));
}

#[test]
fn test_load_toml_overrides() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("devpain.toml"),
        "[scan]\nextensions = [\".rs\"]\nmax_files = 7\nlookback_days = 30\nhistory_top = 5\nexclude = [\"^target/\"]\n",
    )
    .unwrap();
    let c = ScanConfig::load(Mode::Full, d.path()).unwrap();
    assert_eq!(c.extensions, vec![".rs".to_string()]);
    assert_eq!(c.max_files, 7);
    assert_eq!(c.lookback_days, 30);
    assert_eq!(c.history_top, 5);
    assert_eq!(c.exclude_patterns.len(), 1);
    assert_eq!(c.output_path, d.path().join("devpain_report.md"));
}

#[test]
fn test_broken_toml_is_ignored() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("devpain.toml"), "[scan\nmax_files = ").unwrap();
    let c = ScanConfig::load(Mode::Full, d.path()).unwrap();
    assert_eq!(c.max_files, 50);
}

#[test]
fn test_bad_exclude_pattern_is_fatal() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("devpain.toml"), "[scan]\nexclude = [\"(unclosed\"]\n").unwrap();
    let err = ScanConfig::load(Mode::Full, d.path()).unwrap_err();
    assert!(matches!(err, DevPainError::InvalidPattern(_)));
}

#[test]
fn test_misspelled_key_is_rejected() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("devpain.toml"), "[scan]\nmax_file = 7\n").unwrap();
    let c = ScanConfig::load(Mode::Full, d.path()).unwrap();
    assert_eq!(c.max_files, 50);
}

#[test]
fn test_unknown_section_is_rejected() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("devpain.toml"), "[scan]\nmax_files = 7\n\n[report]\nname = \"x.md\"\n").unwrap();
    let c = ScanConfig::load(Mode::Full, d.path()).unwrap();
    assert_eq!(c.max_files, 50);
    assert_eq!(c.output_path, d.path().join("devpain_report.md"));
}

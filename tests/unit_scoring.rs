// tests/unit_scoring.rs
mod common;

use common::{sized_source, write};
use devpain_core::scoring::score;
use devpain_core::types::{DegradeReason, FileStats, Outcome};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_score_counts_lines() {
    let d = TempDir::new().unwrap();
    write(d.path(), "a.py", &sized_source(10, 2, 1024));
    let stats = score(&d.path().join("a.py")).into_value();
    assert_eq!(stats.lines_code, 10);
    assert_eq!(stats.comment_lines, 2);
    assert_eq!(stats.blank_lines, 0);
    assert_eq!(stats.complexity_score, 12);
}

#[test]
fn test_score_is_idempotent() {
    let d = TempDir::new().unwrap();
    write(d.path(), "m.js", "// header\nlet a = 1;\n\n/* c */\nf(a);\n");
    let path = d.path().join("m.js");
    let first = score(&path);
    let second = score(&path);
    assert_eq!(first, second);
    assert!(!first.is_degraded());
}

#[test]
fn test_invalid_utf8_is_tolerated() {
    let d = TempDir::new().unwrap();
    let path = d.path().join("bin.c");
    fs::write(&path, b"int x;\n\xff\xfe garbage\n// ok\n").unwrap();
    let stats = score(&path).into_value();
    assert_eq!(stats.lines_total, 3);
    assert_eq!(stats.lines_code, 2);
    assert_eq!(stats.comment_lines, 1);
}

#[test]
fn test_missing_file_is_degraded() {
    let d = TempDir::new().unwrap();
    let outcome = score(&d.path().join("gone.py"));
    assert!(matches!(
        outcome,
        Outcome::Degraded { value, reason: DegradeReason::Unreadable(_) } if value == FileStats::default()
    ));
}

#[test]
fn test_total_is_sum_of_buckets() {
    let d = TempDir::new().unwrap();
    write(d.path(), "mixed.py", "#!/usr/bin/env python\n\nimport os\n  # x\n\t\nos.exit()\n/* odd */\n");
    let s = score(&d.path().join("mixed.py")).into_value();
    assert_eq!(s.lines_total, 7);
    assert_eq!(s.lines_total, s.lines_code + s.comment_lines + s.blank_lines);
}

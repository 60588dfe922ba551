// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Source text with `comments` `#` lines followed by `code` code lines,
/// padded with trailing spaces to exactly `bytes` bytes.
pub fn sized_source(code: usize, comments: usize, bytes: usize) -> String {
    let mut lines = Vec::new();
    for i in 0..comments {
        lines.push(format!("# note {i}"));
    }
    for i in 0..code {
        lines.push(format!("x{i} = {i}"));
    }
    let body = lines.join("\n");
    assert!(body.len() + 1 <= bytes, "fixture too large for {bytes} bytes");
    let pad = " ".repeat(bytes - body.len() - 1);
    format!("{body}{pad}\n")
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// src/discovery.rs
use crate::config::{has_suffix, ScanConfig};
use crate::types::FileRecord;
use regex::Regex;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Files found under the scan root, in walk order.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub files: Vec<FileRecord>,
    /// Entries the walker could not read, including symlink loops.
    pub skipped: usize,
    /// True when more matching files existed past `max_files`.
    pub truncated: bool,
}

/// Filters applied to each walked file.
struct Selector<'a> {
    extensions: &'a [String],
    name_filter: Option<String>,
    exclude: &'a [Regex],
}

impl Selector<'_> {
    fn accepts(&self, file_name: &str, relative: &str) -> bool {
        if !has_suffix(file_name, self.extensions) {
            return false;
        }
        if let Some(needle) = &self.name_filter {
            if !file_name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        !self.exclude.iter().any(|re| re.is_match(relative))
    }
}

/// Runs discovery with every filter from `config`.
#[must_use]
pub fn discover(config: &ScanConfig) -> Discovery {
    let selector = Selector {
        extensions: &config.extensions,
        name_filter: config.name_filter.as_ref().map(|n| n.to_lowercase()),
        exclude: &config.exclude_patterns,
    };
    walk(&config.root, &selector, config.max_files)
}

/// Extension-only discovery: every file under `root` whose name ends with
/// one of `extensions`, capped at `max_files`.
#[must_use]
pub fn discover_in(root: &Path, extensions: &[String], max_files: usize) -> Discovery {
    let selector = Selector { extensions, name_filter: None, exclude: &[] };
    walk(root, &selector, max_files)
}

fn walk(root: &Path, selector: &Selector<'_>, max_files: usize) -> Discovery {
    // follow_links makes walkdir track ancestors, so a symlink back up the
    // tree surfaces as an error entry instead of recursing forever.
    let walker = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    let mut found = Discovery::default();
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry: {e}");
                found.skipped += 1;
                continue;
            }
        };
        let Some(record) = select(root, &entry, selector) else {
            continue;
        };
        if found.files.len() >= max_files {
            found.truncated = true;
            break;
        }
        found.files.push(record);
    }

    if found.skipped > 0 {
        log::warn!("Encountered {} errors during file walk", found.skipped);
    }
    found
}

fn select(root: &Path, entry: &DirEntry, selector: &Selector<'_>) -> Option<FileRecord> {
    if !entry.file_type().is_file() {
        return None;
    }
    let file_name = entry.file_name().to_string_lossy();
    let relative = relative_path(root, entry.path());
    if !selector.accepts(&file_name, &relative) {
        return None;
    }
    let size_bytes = entry.metadata().map_or(0, |m| m.len());
    Some(FileRecord::new(relative, size_bytes))
}

/// Path of `path` relative to `root`, with `/` separators.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    normalize_path(rel)
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

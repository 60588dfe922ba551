// src/config/io.rs
use super::types::{DevPainToml, ScanConfig, ScanSection};
use crate::constants::CONFIG_FILE;
use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Reads `devpain.toml` from `root`. A missing file is normal; a broken one
/// is reported and ignored so the run falls back to the preset.
#[must_use]
pub fn read_config_file(root: &Path) -> Option<DevPainToml> {
    let path = root.join(CONFIG_FILE);
    let content = fs::read_to_string(&path).ok()?;
    match parse_toml(&content) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Ignoring {}: {e}", path.display());
            None
        }
    }
}

/// Parses the config file body.
///
/// # Errors
/// Returns the TOML decode error.
pub fn parse_toml(content: &str) -> std::result::Result<DevPainToml, toml::de::Error> {
    toml::from_str(content)
}

pub(super) fn apply_scan_section(config: &mut ScanConfig, scan: &ScanSection) -> Result<()> {
    if let Some(exts) = &scan.extensions {
        config.extensions.clone_from(exts);
    }
    if let Some(exts) = &scan.history_extensions {
        config.history_extensions.clone_from(exts);
    }
    if let Some(max) = scan.max_files {
        config.max_files = max;
    }
    if let Some(days) = scan.lookback_days {
        config.lookback_days = days;
    }
    if let Some(top) = scan.history_top {
        config.history_top = top;
    }
    for pattern in &scan.exclude {
        config.exclude_patterns.push(Regex::new(pattern)?);
    }
    Ok(())
}

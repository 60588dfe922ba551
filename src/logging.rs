// src/logging.rs
//! Diagnostic logging to stderr.
//!
//! Progress lines go to stdout through the CLI handlers; this logger carries
//! the degraded-state details (skipped entries, unreadable files, missing git).
//! `RUST_LOG` overrides the level picked from `--verbose`.

use anyhow::{Context, Result};
use log::LevelFilter;

/// Level used when `RUST_LOG` is not set.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger.
///
/// # Errors
/// Returns error if a logger was already installed.
pub fn init_logger(verbose: bool) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(false)
        .try_init()
        .context("Failed to set global logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }
}

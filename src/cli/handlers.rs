// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::ScanConfig;
use crate::exit::DevPainExit;
use crate::history::{ChangeHistory, GitHistory, NoHistory};
use crate::pipeline::{self, Progress, RunOutcome, RunSummary};
use anyhow::{bail, Context, Result};
use chrono::Local;
use colored::Colorize;
use std::path::PathBuf;

fn resolve_root(root: Option<&PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    if !root.is_dir() {
        bail!("Directory does not exist: {}", root.display());
    }
    Ok(root)
}

/// Handles a scan in the mode selected on the command line.
///
/// # Errors
/// Returns error if the root is invalid, the config has a bad pattern, or
/// the report cannot be written.
pub fn handle_scan(cli: &Cli) -> Result<DevPainExit> {
    println!("{}", "🚀 DevPain - Technical Debt Detector".bold());
    println!("{}", "=".repeat(50));

    let root = resolve_root(cli.root.as_ref())?;
    let config = ScanConfig::load(cli.mode, &root)?;
    println!("📁 Analyzing: {} ({})", root.display(), config.mode.label());

    let history: Box<dyn ChangeHistory> = if config.include_history {
        Box::new(GitHistory::new())
    } else {
        Box::new(NoHistory)
    };
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let outcome = pipeline::run(&config, history.as_ref(), &generated_at, print_progress)?;
    match outcome {
        RunOutcome::NothingFound { .. } => {
            let exts = config.extensions.join(", ");
            println!(
                "{}",
                format!("❌ No code files found. Add some {exts} files and try again.").yellow()
            );
        }
        RunOutcome::Written(summary) => print_summary(&summary),
    }
    Ok(DevPainExit::Success)
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Discovered { files, skipped, truncated } => {
            let cap = if truncated { " (cap reached)" } else { "" };
            println!("🔎 Discovered {files} files{cap}");
            if skipped > 0 {
                println!("{}", format!("   {skipped} entries could not be read").dimmed());
            }
        }
        Progress::History { entries, reason: Some(reason) } => {
            println!("{}", format!("⚠ Git history skipped: {reason} ({entries} entries)").yellow());
        }
        Progress::History { entries, reason: None } => {
            println!("🕓 Git history: {entries} frequently changed files");
        }
        Progress::Scored { files, unscorable } => {
            println!("🧮 Scored {files} files");
            if unscorable > 0 {
                println!("{}", format!("⚠ {unscorable} files were unreadable").yellow());
            }
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "{} {}",
        "✅ Report saved:".green().bold(),
        summary.report_path.display()
    );
    println!("📈 Found {} code files to analyze", summary.files);
    if let Some(top) = &summary.top {
        println!("🔥 Top hotspot: {} (risk {})", top.path.yellow(), top.risk_score);
    }
    println!("{}", "🎉 Analysis complete!".green());
}

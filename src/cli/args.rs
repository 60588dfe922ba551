// src/cli/args.rs
use crate::config::Mode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devpain", version, about = "Technical debt hotspot detector")]
pub struct Cli {
    /// Which report to produce
    #[arg(long, short, value_enum, default_value_t = Mode::Full)]
    pub mode: Mode,
    /// Directory to scan (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

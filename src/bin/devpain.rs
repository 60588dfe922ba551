// src/bin/devpain.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use devpain_core::cli::{handlers, Cli};
use devpain_core::exit::DevPainExit;
use devpain_core::logging;

fn main() -> DevPainExit {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            DevPainExit::for_error(&e)
        }
    }
}

fn run() -> Result<DevPainExit> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose)?;
    handlers::handle_scan(&cli)
}

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod history;
pub mod logging;
pub mod pipeline;
pub mod reporting;
pub mod scoring;
pub mod types;

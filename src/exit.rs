// src/exit.rs
//! Process exit codes for `devpain`.
//!
//! "Nothing found" is a success; only a failed report write gets its own code.

use std::process::Termination;

use crate::error::DevPainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DevPainExit {
    /// Report written, or no eligible files were found.
    Success = 0,
    /// Generic error (bad root, invalid config pattern, I/O).
    Error = 1,
    /// The report file could not be written.
    ReportFailure = 3,
}

impl DevPainExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<DevPainError>() {
            Some(e) if e.is_report_write() => Self::ReportFailure,
            _ => Self::Error,
        }
    }
}

impl Termination for DevPainExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

//! Error types for check-yum operations.
//!
//! This module defines [`ProbeError`], the error type returned by every
//! stage of a check, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is terminal for the run; nothing is retried
//! - Each variant knows the monitoring [`Status`] it maps to
//! - `main` performs the single conversion into a [`Verdict`] and exit code
//! - Lock contention is not an error, see [`crate::check::Classification`]

use std::path::PathBuf;
use thiserror::Error;

use crate::check::{Status, Verdict};

/// Core error type for check-yum operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Invalid configuration value (e.g. timeout out of range).
    #[error("{message}")]
    Config { message: String },

    /// The package manager binary is missing or cannot be executed.
    #[error("{} {reason}", .path.display())]
    ExecutableUnusable { path: PathBuf, reason: String },

    /// The external command could not be started or was killed.
    #[error("{message}")]
    Execution { message: String },

    /// The external command produced no output at all.
    #[error("No output from utility '{tool}'")]
    EmptyOutput { tool: String },

    /// The external command did not finish before the deadline.
    #[error(
        "check-yum self terminated after exceeding the timeout ({seconds} {})",
        seconds_unit(.seconds)
    )]
    Timeout { seconds: u64 },

    /// The tool output did not match any known format.
    #[error("{message}")]
    Format { status: Status, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Build a format error that should surface as the given status.
    pub fn format(status: Status, message: impl Into<String>) -> Self {
        Self::Format {
            status,
            message: message.into(),
        }
    }

    /// The monitoring status this error is reported as.
    pub fn status(&self) -> Status {
        match self {
            ProbeError::Format { status, .. } => *status,
            _ => Status::Unknown,
        }
    }

    /// Convert into the terminal verdict for the run.
    pub fn into_verdict(self) -> Verdict {
        Verdict::new(self.status(), self.to_string())
    }
}

fn seconds_unit(seconds: &u64) -> &'static str {
    if *seconds == 1 {
        "second"
    } else {
        "seconds"
    }
}

/// Result type alias for check-yum operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

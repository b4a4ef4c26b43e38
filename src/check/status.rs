//! Monitoring status levels and verdicts.
//!
//! A [`Verdict`] is the terminal output of a run: one [`Status`] and one
//! message line, optionally followed by performance data.

use std::fmt;

/// Standard monitoring status levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Process exit code a monitoring supervisor expects for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    /// Upper-case label as shown by monitoring front-ends.
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final outcome of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Status level.
    pub status: Status,
    /// Human-readable summary. Never empty.
    pub message: String,
    /// Optional machine-parsable performance data.
    pub perfdata: Option<String>,
}

impl Verdict {
    /// Create a verdict without performance data.
    ///
    /// An empty message is replaced by the status label so the output line
    /// is never blank.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = format!("{} - no message", status.label());
        }
        Self {
            status,
            message,
            perfdata: None,
        }
    }

    /// Attach performance data.
    pub fn with_perfdata(mut self, perfdata: impl Into<String>) -> Self {
        let perfdata = perfdata.into();
        self.perfdata = if perfdata.is_empty() {
            None
        } else {
            Some(perfdata)
        };
        self
    }

    /// Render the single stdout line.
    pub fn render(&self) -> String {
        match &self.perfdata {
            Some(perfdata) => format!("{} | {}", self.message, perfdata),
            None => self.message.clone(),
        }
    }
}

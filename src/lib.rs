//! check_yum - Monitoring probe for pending YUM updates.
//!
//! Runs `yum check-update` (optionally through the security plugin), parses
//! the output into update counts, and reports an OK / WARNING / CRITICAL /
//! UNKNOWN verdict with a one-line summary for a monitoring supervisor.
//!
//! # Modules
//!
//! - [`check`] - Exit-code classification, output parsing, and verdicts
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check policy and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution
//!
//! # Example
//!
//! ```
//! use check_yum::check::{run_check, Status};
//! use check_yum::config::PolicyConfig;
//! use check_yum::shell::MockRunner;
//!
//! let runner = MockRunner::new(
//!     100,
//!     "Loaded plugins: security\nNeeded 2 of 10 packages, for security\n",
//! );
//! let verdict = run_check(&PolicyConfig::default(), &runner).unwrap();
//! assert_eq!(verdict.status, Status::Critical);
//! assert_eq!(
//!     verdict.render(),
//!     "2 Security Updates Available. 8 Non-Security Updates Available"
//! );
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;

pub use error::{ProbeError, Result};

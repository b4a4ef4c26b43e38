//! Check policy.
//!
//! [`PolicyConfig`] is built once from the command line, validated, and then
//! passed by reference into every stage of a check. Nothing mutates it after
//! construction.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;

use super::validator::validate_timeout;

/// Default location of the YUM executable.
pub const DEFAULT_YUM_PATH: &str = "/usr/bin/yum";

/// Default wall-clock budget for the whole check, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 55;

/// Which kind of update query to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// `check-update`: every pending update counts the same.
    All,
    /// `--security check-update`: security updates are reported separately.
    Security,
}

/// Immutable policy for a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Treat every update as critical instead of only security updates.
    pub check_all_updates: bool,
    /// Warn when non-security updates are pending.
    pub warn_on_any_update: bool,
    /// Report OK instead of WARNING when YUM is locked.
    pub suppress_lock_warning: bool,
    /// Report OK even when updates are pending.
    pub suppress_update_warning: bool,
    /// Run YUM from cache only (`-C`).
    pub cache_only: bool,
    /// Repositories to enable, in first-seen order.
    pub enabled_repos: Vec<String>,
    /// Repositories to disable, in first-seen order.
    pub disabled_repos: Vec<String>,
    /// Timeout in seconds, within 1..=3600.
    pub timeout_secs: u64,
    /// Path to the YUM executable.
    pub executable: PathBuf,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            check_all_updates: false,
            warn_on_any_update: false,
            suppress_lock_warning: false,
            suppress_update_warning: false,
            cache_only: false,
            enabled_repos: Vec::new(),
            disabled_repos: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            executable: PathBuf::from(DEFAULT_YUM_PATH),
        }
    }
}

impl PolicyConfig {
    /// Build and validate a policy from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let timeout_secs = validate_timeout(cli.timeout.as_deref())?;

        Ok(Self {
            check_all_updates: cli.all_updates,
            warn_on_any_update: cli.warn_on_any_update,
            suppress_lock_warning: cli.no_warn_on_lock,
            suppress_update_warning: cli.no_warn_on_updates,
            cache_only: cli.cache_only,
            enabled_repos: normalize_repos(&cli.enablerepo),
            disabled_repos: normalize_repos(&cli.disablerepo),
            timeout_secs,
            executable: cli.yum_path.clone(),
        })
    }

    /// The query mode selected by this policy.
    pub fn mode(&self) -> UpdateMode {
        if self.check_all_updates {
            UpdateMode::All
        } else {
            UpdateMode::Security
        }
    }
}

/// Trim, drop empties, and de-duplicate while keeping first-seen order.
fn normalize_repos(repos: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(repos.len());
    for repo in repos.iter().map(|r| r.trim()).filter(|r| !r.is_empty()) {
        if !seen.iter().any(|s: &String| s == repo) {
            seen.push(repo.to_string());
        }
    }
    seen
}

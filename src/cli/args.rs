//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::DEFAULT_YUM_PATH;

/// check_yum - Check YUM for pending security and package updates.
#[derive(Debug, Parser)]
#[command(name = "check_yum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Do not distinguish between security and non-security updates; return
    /// critical for any available update
    #[arg(long)]
    pub all_updates: bool,

    /// Warn if any non-security package updates are available
    #[arg(long)]
    pub warn_on_any_update: bool,

    /// Run entirely from cache and do not update the cache when running YUM
    #[arg(short = 'C', long)]
    pub cache_only: bool,

    /// Return OK instead of WARNING when YUM is locked by another instance
    #[arg(long)]
    pub no_warn_on_lock: bool,

    /// Return OK instead of WARNING/CRITICAL even when updates are available
    #[arg(long)]
    pub no_warn_on_updates: bool,

    /// Repositories to enable (comma-separated, repeatable)
    #[arg(long, value_name = "REPOS", value_delimiter = ',')]
    pub enablerepo: Vec<String>,

    /// Repositories to disable (comma-separated, repeatable)
    #[arg(long, value_name = "REPOS", value_delimiter = ',')]
    pub disablerepo: Vec<String>,

    /// Timeout in seconds after which the check gives up (default 55)
    #[arg(short, long, value_name = "SECONDS", env = "CHECK_YUM_TIMEOUT")]
    pub timeout: Option<String>,

    /// Path to the YUM executable
    #[arg(long, value_name = "PATH", env = "CHECK_YUM_PATH", default_value = DEFAULT_YUM_PATH)]
    pub yum_path: PathBuf,

    /// Verbose logging on stderr; repeat for more detail (-vvv for tracing)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

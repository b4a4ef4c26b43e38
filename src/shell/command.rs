//! External command execution.
//!
//! The package manager is run with stdout and stderr attached to the same
//! pipe, so the captured text interleaves exactly as the tool wrote it. The
//! wait is bounded by a deadline; once it passes the child is killed and the
//! run ends with [`ProbeError::Timeout`].

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::config::{PolicyConfig, UpdateMode};
use crate::error::{ProbeError, Result};

/// How often the child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured output of one package manager run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Process exit code.
    pub exit_code: i32,

    /// Merged stdout/stderr split on `\n`. Newline-terminated output ends
    /// with an empty element.
    pub output_lines: Vec<String>,
}

impl RunResult {
    /// Build a result from raw captured text.
    pub fn from_output(exit_code: i32, output: &str) -> Self {
        Self {
            exit_code,
            output_lines: output.split('\n').map(String::from).collect(),
        }
    }
}

/// A fully built command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation with explicit arguments.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the YUM command line for a policy.
    ///
    /// Base arguments depend on the update mode; cache and repository flags
    /// are appended after them.
    pub fn for_policy(policy: &PolicyConfig) -> Self {
        let mut args: Vec<String> = match policy.mode() {
            UpdateMode::All => vec!["check-update".into()],
            UpdateMode::Security => vec!["--security".into(), "check-update".into()],
        };

        if policy.cache_only {
            args.push("-C".into());
        }
        for repo in &policy.enabled_repos {
            args.push(format!("--enablerepo={}", repo));
        }
        for repo in &policy.disabled_repos {
            args.push(format!("--disablerepo={}", repo));
        }

        Self::new(policy.executable.clone(), args)
    }

    /// Name used in diagnostics.
    pub fn tool(&self) -> String {
        self.program.display().to_string()
    }

    /// Shell-style rendering for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.tool())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Something that can run an [`Invocation`] and capture its output.
///
/// The real implementation is [`SystemRunner`]; tests substitute canned
/// output.
pub trait CommandRunner {
    /// Run the invocation to completion.
    fn run(&self, invocation: &Invocation) -> Result<RunResult>;
}

/// Runs commands as child processes with a wall-clock deadline.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    /// Create a runner that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Create a runner from a policy's timeout.
    pub fn for_policy(policy: &PolicyConfig) -> Self {
        Self::new(Duration::from_secs(policy.timeout_secs))
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunResult> {
        execute(invocation, self.timeout)
    }
}

/// Execute `invocation`, capturing merged output, within `timeout`.
pub fn execute(invocation: &Invocation, timeout: Duration) -> Result<RunResult> {
    let tool = invocation.tool();
    debug!("running command: {}", invocation.display());

    let (mut reader, writer) = io::pipe()?;
    let writer_err = writer.try_clone()?;

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_err);

    let deadline = Instant::now() + timeout;
    let spawned = cmd.spawn();
    // The pipe only reaches EOF once every write end is closed, including
    // the copies still owned by `cmd`.
    drop(cmd);
    let mut child = spawned.map_err(|e| spawn_error(&tool, e))?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(buf);
    });

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(err) => {
                kill_and_reap(&mut child);
                return Err(err.into());
            }
        }
        if Instant::now() >= deadline {
            warn!(
                "{} did not finish within {}s, killing it",
                tool,
                timeout.as_secs()
            );
            kill_and_reap(&mut child);
            return Err(ProbeError::Timeout {
                seconds: timeout.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    // A grandchild may still hold the pipe open after the child exits.
    let remaining = deadline.saturating_duration_since(Instant::now());
    let raw = match rx.recv_timeout(remaining) {
        Ok(raw) => raw,
        Err(RecvTimeoutError::Timeout) => {
            return Err(ProbeError::Timeout {
                seconds: timeout.as_secs(),
            })
        }
        Err(RecvTimeoutError::Disconnected) => Vec::new(),
    };

    let exit_code = status.code().ok_or_else(|| ProbeError::Execution {
        message: format!("Utility '{}' was terminated by a signal", tool),
    })?;

    if raw.is_empty() {
        return Err(ProbeError::EmptyOutput { tool });
    }

    let output = String::from_utf8_lossy(&raw);
    debug!("returncode: {}", exit_code);
    trace!("output:\n{}", output);

    Ok(RunResult::from_output(exit_code, &output))
}

/// Kill an abandoned child and collect its exit status.
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_error(tool: &str, err: io::Error) -> ProbeError {
    let message = if err.kind() == io::ErrorKind::NotFound {
        format!("Cannot find utility '{}'", tool)
    } else {
        format!("Error trying to run utility '{}' - {}", tool, err)
    };
    ProbeError::Execution { message }
}

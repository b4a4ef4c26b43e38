//! Check orchestration.
//!
//! Drives one run end to end: build the command line, run it, gate on the
//! exit code, parse the output, and derive the verdict. Every stage returns
//! a [`Result`]; the first failure ends the run.

use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{PolicyConfig, UpdateMode};
use crate::error::Result;
use crate::shell::{ensure_usable, CommandRunner, Invocation, SystemRunner};

use super::exit_code::{classify, Classification};
use super::parser::{parse_all_updates, parse_security_updates, UpdateCounts};
use super::status::Verdict;
use super::verdict::derive_verdict;

/// Run the check with an arbitrary runner.
pub fn run_check(policy: &PolicyConfig, runner: &dyn CommandRunner) -> Result<Verdict> {
    let invocation = Invocation::for_policy(policy);
    match policy.mode() {
        UpdateMode::All => info!("checking for any updates"),
        UpdateMode::Security => info!("checking for security updates"),
    }

    let result = runner.run(&invocation)?;

    match classify(result.exit_code, &result.output_lines, policy) {
        Classification::Continue => {}
        Classification::Locked(verdict) | Classification::Fatal(verdict) => return Ok(verdict),
    }

    let counts = match policy.mode() {
        UpdateMode::All => UpdateCounts::All {
            count: parse_all_updates(&result.output_lines)?,
        },
        UpdateMode::Security => {
            let (security, other) = parse_security_updates(&result.output_lines)?;
            UpdateCounts::Split { security, other }
        }
    };
    debug!("parsed counts: {:?}", counts);

    Ok(derive_verdict(counts, policy))
}

/// Run the check against the real executable.
///
/// The executable is checked before any other argument is validated.
/// Never fails: errors become their UNKNOWN or WARNING verdicts.
pub fn check(cli: &Cli) -> Verdict {
    let outcome = ensure_usable(&cli.yum_path)
        .and_then(|()| PolicyConfig::from_cli(cli))
        .and_then(|policy| run_check(&policy, &SystemRunner::for_policy(&policy)));

    outcome.unwrap_or_else(|err| err.into_verdict())
}

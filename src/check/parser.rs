//! YUM output parsing.
//!
//! The text YUM prints is not a stable interface. It changed between RHEL
//! releases and is prefixed by plugin and mirror noise. Both entry points
//! only accept shapes they recognize and fail with [`ProbeError::Format`]
//! otherwise, because under-reporting a security update is worse than a
//! spurious alert.
//!
//! # All updates
//!
//! `yum check-update` prints a preamble, a blank line, then one line per
//! package:
//!
//! ```text
//! Loaded plugins: fastestmirror
//!
//! kernel.x86_64            3.10.0-1160.el7         updates
//! openssl.x86_64           1:1.0.2k-25.el7_9       updates
//! ```
//!
//! # Security updates
//!
//! `yum --security check-update` ends with a summary line, phrased
//! differently by the RHEL 5 and RHEL 6 era security plugins.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::error::{ProbeError, Result};

use super::status::Status;

/// Appended to every format error.
const UPGRADE_ADVICE: &str = "Please make sure you have upgraded to the latest version of this \
    plugin. If the problem persists, please contact the author for a fix";

/// Output may exceed the advertised total by this many lines of noise.
const MAX_NOISE_LINES: usize = 25;

lazy_regex!(RE_LOADING_QUOTED_PLUGIN, r#"Loading\s+".+"\s+plugin"#);
lazy_regex!(
    RE_PACKAGE_LINE,
    r"^.+\.(i[3456]86|x86_64|noarch)\s+.+\s+.+$"
);
lazy_regex!(
    RE_NO_SECURITY_RHEL5,
    r"^No packages needed, for security, (\d+) available"
);
lazy_regex!(
    RE_NO_SECURITY_RHEL6,
    r"^No packages needed for security; (\d+) packages available"
);
lazy_regex!(
    RE_SECURITY_RHEL5,
    r"^Needed (\d+) of (\d+) packages, for security"
);
lazy_regex!(
    RE_SECURITY_RHEL6,
    r"^(\d+) package\(s\) needed for security, out of (\d+) available"
);

/// Parsed update counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCounts {
    /// Every pending update, undifferentiated.
    All { count: u64 },
    /// Security updates and everything else.
    Split { security: u64, other: u64 },
}

/// How a summary line reports its numbers.
#[derive(Debug, Clone, Copy)]
enum SummaryShape {
    /// Only a total is given; no security updates.
    TotalOnly,
    /// Security count first, then total.
    SecurityOfTotal,
}

/// Summary patterns in the order they are tried on each line.
static SUMMARY_PATTERNS: LazyLock<[(&'static Regex, SummaryShape); 4]> = LazyLock::new(|| {
    [
        (&*RE_NO_SECURITY_RHEL5, SummaryShape::TotalOnly),
        (&*RE_NO_SECURITY_RHEL6, SummaryShape::TotalOnly),
        (&*RE_SECURITY_RHEL5, SummaryShape::SecurityOfTotal),
        (&*RE_SECURITY_RHEL6, SummaryShape::SecurityOfTotal),
    ]
});

fn format_error(status: Status, problem: &str) -> ProbeError {
    ProbeError::format(status, format!("{}. {}", problem, UPGRADE_ADVICE))
}

/// Count pending updates from `yum check-update` output.
pub fn parse_all_updates(lines: &[String]) -> Result<u64> {
    let joined = lines.join("\n");
    let sections: Vec<&str> = joined.split("\n\n").collect();

    for section in &sections {
        trace!("section:\n{}", section);
    }

    let preamble = sections[0];
    let preamble_known = preamble.contains("Setting up repositories")
        || preamble.contains("Loaded plugins: ")
        || RE_LOADING_QUOTED_PLUGIN.is_match(preamble);

    if sections.len() > 2 || !preamble_known {
        return Err(format_error(
            Status::Warning,
            "YUM output signature does not match current known format",
        ));
    }

    let count = match sections.get(1) {
        None => 0,
        Some(packages) => packages
            .split('\n')
            .filter(|line| line.split_whitespace().nth(1).is_some())
            .count() as u64,
    };

    // Independent recount over the raw output guards against truncated or
    // re-wrapped package lines.
    let package_lines = lines
        .iter()
        .filter(|line| RE_PACKAGE_LINE.is_match(line))
        .count() as u64;

    debug!(
        "section count {}, package line count {}",
        count, package_lines
    );

    if package_lines != count {
        return Err(format_error(
            Status::Unknown,
            "Error parsing package information, inconsistent package count, YUM output may \
             have changed",
        ));
    }

    Ok(count)
}

/// Extract `(security, other)` from `yum --security check-update` output.
pub fn parse_security_updates(lines: &[String]) -> Result<(u64, u64)> {
    let (security, total) = lines
        .iter()
        .find_map(|line| summary_numbers(line))
        .ok_or_else(|| {
            format_error(Status::Warning, "Cannot find summary line in YUM output")
        })??;

    debug!("summary: {} security of {} total", security, total);

    let other = total.checked_sub(security).ok_or_else(|| {
        format_error(
            Status::Warning,
            "Error parsing package information, YUM output may have changed",
        )
    })?;

    if lines.len() as u64 > total.saturating_add(MAX_NOISE_LINES as u64) {
        return Err(format_error(
            Status::Warning,
            "YUM output signature is larger than current known format",
        ));
    }

    Ok((security, other))
}

/// Parse the first summary pattern matching `line`, if any.
fn summary_numbers(line: &str) -> Option<Result<(u64, u64)>> {
    SUMMARY_PATTERNS.iter().find_map(|(regex, shape)| {
        let caps = regex.captures(line)?;
        let parsed = match shape {
            SummaryShape::TotalOnly => number(&caps[1]).map(|total| (0, total)),
            SummaryShape::SecurityOfTotal => {
                number(&caps[1]).and_then(|security| Ok((security, number(&caps[2])?)))
            }
        };
        Some(parsed)
    })
}

fn number(digits: &str) -> Result<u64> {
    digits.parse().map_err(|_| {
        format_error(
            Status::Warning,
            "Error parsing package information, YUM output may have changed",
        )
    })
}

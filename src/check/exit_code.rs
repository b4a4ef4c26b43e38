//! Exit-code classification.
//!
//! YUM's exit code decides whether its output is worth parsing at all:
//!
//! | Code | Meaning | Result |
//! |------|---------|--------|
//! | 0 | no updates | [`Classification::Continue`] |
//! | 100 | updates available | [`Classification::Continue`] |
//! | 200 | locked or failed | [`Classification::Locked`] or [`Classification::Fatal`] |
//! | other | error | [`Classification::Fatal`] |

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::config::PolicyConfig;

use super::status::{Status, Verdict};

/// Message reported when another YUM holds the lock.
pub const LOCKED_MESSAGE: &str = "Cannot check for updates, another instance of YUM is running";

/// Message reported when the security plugin is unavailable.
pub const SECURITY_PLUGIN_MESSAGE: &str = "Security plugin for YUM is required. Try to \
    'yum install yum-security' and then re-run this plugin. Alternatively, to just alert on \
    any update which does not require the security plugin, try --all-updates";

const SECURITY_PLUGIN_LOADED: &str = r#"Loading "security" plugin"#;
const SECURITY_OPTION_MISSING: &str = "Command line error: no such option: --security";

lazy_regex!(RE_LOADING_PLUGIN, r"^Loading .+ plugin$");

/// What to do after inspecting the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Output is worth parsing.
    Continue,
    /// Another instance holds the lock; not an error.
    Locked(Verdict),
    /// The run failed; report this verdict.
    Fatal(Verdict),
}

/// Classify a YUM exit code against its output.
pub fn classify(exit_code: i32, lines: &[String], policy: &PolicyConfig) -> Classification {
    match exit_code {
        0 | 100 => Classification::Continue,
        200 => {
            let locked = lines
                .len()
                .checked_sub(2)
                .map(|i| lines[i].as_str())
                .is_some_and(|line| line.contains("lock") || line.contains("another copy is running"));

            if locked {
                let status = if policy.suppress_lock_warning {
                    Status::Ok
                } else {
                    Status::Warning
                };
                Classification::Locked(Verdict::new(status, LOCKED_MESSAGE))
            } else {
                warn!("yum exited with 200 without a lock marker");
                Classification::Fatal(Verdict::new(Status::Unknown, clean_output(lines)))
            }
        }
        code => {
            warn!("yum exited with unexpected code {}", code);
            // Both markers are whole-line matches.
            let plugin_loaded = lines.iter().any(|l| l == SECURITY_PLUGIN_LOADED);
            let option_missing = lines.iter().any(|l| l == SECURITY_OPTION_MISSING);

            if !plugin_loaded || option_missing {
                Classification::Fatal(Verdict::new(Status::Unknown, SECURITY_PLUGIN_MESSAGE))
            } else {
                Classification::Fatal(Verdict::new(Status::Unknown, clean_output(lines)))
            }
        }
    }
}

/// Collapse output into one diagnostic line, dropping plugin-loading noise.
pub fn clean_output(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|line| !RE_LOADING_PLUGIN.is_match(line))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(String::from).collect()
    }

    const LOCKED_OUTPUT: &str = "Loaded plugins: fastestmirror\n\
        Existing lock /var/run/yum.pid: another copy is running as pid 1234.\n\
        Existing lock /var/run/yum.pid: another copy is running.\n";

    #[test]
    fn success_and_updates_continue() {
        let policy = PolicyConfig::default();
        assert_eq!(classify(0, &lines("x\n"), &policy), Classification::Continue);
        assert_eq!(classify(100, &lines("x\n"), &policy), Classification::Continue);
    }

    #[test]
    fn lock_warns_by_default() {
        let policy = PolicyConfig::default();
        let Classification::Locked(verdict) = classify(200, &lines(LOCKED_OUTPUT), &policy) else {
            panic!("expected lock classification");
        };
        assert_eq!(verdict.status, Status::Warning);
        assert_eq!(verdict.message, LOCKED_MESSAGE);
    }

    #[test]
    fn lock_is_ok_when_suppressed() {
        let policy = PolicyConfig {
            suppress_lock_warning: true,
            ..Default::default()
        };
        let Classification::Locked(verdict) = classify(200, &lines(LOCKED_OUTPUT), &policy) else {
            panic!("expected lock classification");
        };
        assert_eq!(verdict.status, Status::Ok);
    }

    #[test]
    fn lock_marker_is_read_from_second_to_last_line() {
        let policy = PolicyConfig::default();
        // Without a trailing newline the marker is the last element, not
        // the second-to-last.
        let output = lines("Existing lock /var/run/yum.pid: another copy is running.\nfinal");
        assert!(matches!(
            classify(200, &output, &policy),
            Classification::Locked(_)
        ));

        let output = lines("Existing lock /var/run/yum.pid\nsomething else\n");
        assert!(matches!(
            classify(200, &output, &policy),
            Classification::Fatal(_)
        ));
    }

    #[test]
    fn exit_200_without_lock_reports_cleaned_output() {
        let policy = PolicyConfig::default();
        let output = lines("Loading \"fastestmirror\" plugin\nError: Cannot retrieve repository metadata\n\n");
        let Classification::Fatal(verdict) = classify(200, &output, &policy) else {
            panic!("expected fatal classification");
        };
        assert_eq!(verdict.status, Status::Unknown);
        assert_eq!(verdict.message, "Error: Cannot retrieve repository metadata");
    }

    #[test]
    fn exit_200_with_single_line_is_fatal() {
        let policy = PolicyConfig::default();
        let Classification::Fatal(verdict) = classify(200, &lines("lock"), &policy) else {
            panic!("expected fatal classification");
        };
        assert_eq!(verdict.message, "lock");
    }

    #[test]
    fn other_code_without_security_plugin_asks_for_it() {
        let policy = PolicyConfig::default();
        let output = lines("Loaded plugins: fastestmirror\nError: something\n");
        let Classification::Fatal(verdict) = classify(1, &output, &policy) else {
            panic!("expected fatal classification");
        };
        assert_eq!(verdict.status, Status::Unknown);
        assert_eq!(verdict.message, SECURITY_PLUGIN_MESSAGE);
    }

    #[test]
    fn other_code_with_no_such_option_asks_for_plugin() {
        let policy = PolicyConfig::default();
        let output = lines(
            "Loading \"security\" plugin\nCommand line error: no such option: --security\n",
        );
        let Classification::Fatal(verdict) = classify(1, &output, &policy) else {
            panic!("expected fatal classification");
        };
        assert_eq!(verdict.message, SECURITY_PLUGIN_MESSAGE);
    }

    #[test]
    fn other_code_with_plugin_loaded_reports_output() {
        let policy = PolicyConfig::default();
        let output = lines("Loading \"security\" plugin\nError: rpmdb open failed\n");
        let Classification::Fatal(verdict) = classify(1, &output, &policy) else {
            panic!("expected fatal classification");
        };
        assert_eq!(verdict.message, "Error: rpmdb open failed");
    }

    #[test]
    fn clean_output_drops_plugin_lines_and_joins() {
        let output = lines("Loading \"security\" plugin\n  first\nsecond  \nLoading mirror plugin\n");
        assert_eq!(clean_output(&output), "first second");
    }
}

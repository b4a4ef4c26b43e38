//! Verdict derivation from update counts and policy.

use crate::config::PolicyConfig;

use super::parser::UpdateCounts;
use super::status::{Status, Verdict};

/// Level for pending updates that would otherwise alert.
fn update_status(policy: &PolicyConfig, alert: Status) -> Status {
    if policy.suppress_update_warning {
        Status::Ok
    } else {
        alert
    }
}

/// "1 Update Available" / "3 Updates Available", with an optional qualifier.
fn count_phrase(count: u64, qualifier: &str) -> String {
    let noun = if count == 1 { "Update" } else { "Updates" };
    if qualifier.is_empty() {
        format!("{} {} Available", count, noun)
    } else {
        format!("{} {} {} Available", count, qualifier, noun)
    }
}

/// Verdict for all-updates mode.
pub fn all_updates_verdict(count: u64, policy: &PolicyConfig) -> Verdict {
    if count == 0 {
        return Verdict::new(Status::Ok, count_phrase(0, ""));
    }
    Verdict::new(
        update_status(policy, Status::Critical),
        count_phrase(count, ""),
    )
}

/// Verdict for security mode.
pub fn security_verdict(security: u64, other: u64, policy: &PolicyConfig) -> Verdict {
    let mut status = if security == 0 {
        Status::Ok
    } else {
        update_status(policy, Status::Critical)
    };
    let mut message = count_phrase(security, "Security");

    if other != 0 {
        if policy.warn_on_any_update && status != Status::Critical {
            status = update_status(policy, Status::Warning);
        }
        message.push_str(". ");
        message.push_str(&count_phrase(other, "Non-Security"));
    }

    Verdict::new(status, message)
}

/// Dispatch on the shape of the parsed counts.
pub fn derive_verdict(counts: UpdateCounts, policy: &PolicyConfig) -> Verdict {
    match counts {
        UpdateCounts::All { count } => all_updates_verdict(count, policy),
        UpdateCounts::Split { security, other } => security_verdict(security, other, policy),
    }
}

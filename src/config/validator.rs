//! Configuration validation rules.
//!
//! Values arrive as raw strings so that a malformed value is reported as an
//! UNKNOWN verdict with a probe-specific message rather than a usage error.

use crate::error::{ProbeError, Result};

use super::policy::DEFAULT_TIMEOUT_SECS;

/// Smallest accepted timeout, in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Largest accepted timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Validate the timeout argument, falling back to the default when absent.
pub fn validate_timeout(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TIMEOUT_SECS);
    };

    let timeout: i64 = raw.trim().parse().map_err(|_| ProbeError::Config {
        message: "Timeout must be a whole number, representing the timeout in seconds"
            .to_string(),
    })?;

    if timeout < MIN_TIMEOUT_SECS as i64 || timeout > MAX_TIMEOUT_SECS as i64 {
        return Err(ProbeError::Config {
            message: format!(
                "Timeout must be a number between {} and {} seconds",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
            ),
        });
    }

    Ok(timeout as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_timeout_uses_default() {
        assert_eq!(validate_timeout(None).unwrap(), 55);
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(validate_timeout(Some("1")).unwrap(), 1);
        assert_eq!(validate_timeout(Some("3600")).unwrap(), 3600);
        assert_eq!(validate_timeout(Some(" 30 ")).unwrap(), 30);
    }

    #[test]
    fn rejects_out_of_range() {
        for raw in ["0", "-5", "3601"] {
            let err = validate_timeout(Some(raw)).unwrap_err();
            assert!(err.to_string().contains("between 1 and 3600"), "{raw}");
        }
    }

    #[test]
    fn rejects_non_integer() {
        for raw in ["abc", "1.5", ""] {
            let err = validate_timeout(Some(raw)).unwrap_err();
            assert!(err.to_string().contains("whole number"), "{raw}");
        }
    }
}

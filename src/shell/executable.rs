//! Locating and validating the package manager executable.

use std::path::Path;

use crate::error::{ProbeError, Result};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Ensure `path` exists, is a regular file, and can be executed.
pub fn ensure_usable(path: &Path) -> Result<()> {
    let reason = if !path.exists() {
        "cannot be found"
    } else if !path.is_file() {
        "is not a file"
    } else if !is_executable(path) {
        "is not executable"
    } else {
        return Ok(());
    };

    Err(ProbeError::ExecutableUnusable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    })
}

//! Argument validation shared by the syscall wrappers.
//!
//! Required arguments are checked before any kernel call is attempted.

use std::path::Path;

use wslkit_common::{WslKitError, WslKitResult};

pub(crate) fn require_path(name: &'static str, value: &Path) -> WslKitResult<()> {
    if value.as_os_str().is_empty() {
        return Err(WslKitError::InvalidArgument {
            name,
            reason: "path cannot be empty",
        });
    }
    Ok(())
}

pub(crate) fn require_str(name: &'static str, value: &str) -> WslKitResult<()> {
    if value.is_empty() {
        return Err(WslKitError::InvalidArgument {
            name,
            reason: "value cannot be empty",
        });
    }
    Ok(())
}

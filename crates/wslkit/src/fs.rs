//! Filesystem helpers beyond mounting.

use std::path::Path;

use wslkit_common::{WslKitError, WslKitResult};

use crate::args::require_path;

/// Create a symbolic link at `at` pointing to `to`.
///
/// The link is created even if `to` does not exist.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] if either path is empty, or
/// [`WslKitError::Kernel`] if the symlink(2) call fails (for example when
/// something already exists at `at`).
pub fn create_symlink(at: &Path, to: &Path) -> WslKitResult<()> {
    require_path("at", at)?;
    require_path("to", to)?;

    tracing::debug!(at = %at.display(), to = %to.display(), "creating symbolic link");

    rustix::fs::symlink(to, at).map_err(|e| WslKitError::kernel("symlink", e.raw_os_error()))
}

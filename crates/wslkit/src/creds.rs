//! Credential predicates over the process's real and effective IDs.
//!
//! Each predicate performs a fresh kernel query; nothing is cached. A
//! divergence between real and effective IDs indicates a
//! privilege-elevation mechanism (setuid/setgid bits) is active.

use rustix::process;

/// Is the real UID root, whatever the effective UID is?
#[must_use]
pub fn is_really_root() -> bool {
    process::getuid().is_root()
}

/// Is the effective UID root, whatever the real UID is?
#[must_use]
pub fn is_effectively_root() -> bool {
    process::geteuid().is_root()
}

/// Running setuid root: the effective UID is root while the real UID is
/// not.
#[must_use]
pub fn is_setuid_root() -> bool {
    !is_really_root() && is_effectively_root()
}

/// Do the real and effective UIDs differ?
#[must_use]
pub fn is_setuid() -> bool {
    process::getuid() != process::geteuid()
}

/// Do the real and effective GIDs differ?
#[must_use]
pub fn is_setgid() -> bool {
    process::getgid() != process::getegid()
}

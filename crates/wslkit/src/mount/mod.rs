//! Mount operations.
//!
//! Each function is a single, independent kernel call: mount, bind mount,
//! remount, move mount, propagation change, and detached unmount all share
//! the mount(2) primitive with mutually exclusive flag modes; unmounting
//! uses umount2(2). Required arguments are validated before any kernel
//! call, and every kernel failure is returned as a structured
//! [`WslKitError::Kernel`] carrying the errno and its description.

mod options;

pub use options::{MountOptions, MountPropagation};

use std::path::Path;

use wslkit_common::{WslKitError, WslKitResult};

use crate::args::{require_path, require_str};

/// Mount the filesystem on `source` at the mount point `target`.
///
/// `data` carries filesystem-specific options as an opaque string. A
/// propagation type other than [`MountPropagation::Unspecified`] is
/// applied to the new mount point immediately after the mount itself;
/// propagation bits cannot ride in the same flags word as regular mount
/// options. If that propagation change fails, the new mount is
/// detach-unmounted before the error is returned, so a failed call never
/// leaves a mount behind.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] for empty required arguments,
/// [`WslKitError::ConflictingOptions`] for an invalid option set, or
/// [`WslKitError::Kernel`] if a kernel call fails.
#[cfg(target_os = "linux")]
pub fn mount(
    source: &Path,
    target: &Path,
    fstype: &str,
    options: MountOptions,
    propagation: MountPropagation,
    data: Option<&str>,
) -> WslKitResult<()> {
    use rustix::mount::{UnmountFlags, mount, mount_change, unmount};

    require_path("source", source)?;
    require_path("target", target)?;
    require_str("fstype", fstype)?;

    let flags = options.to_flags()?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        fstype,
        ?flags,
        "mounting filesystem"
    );

    let fstype_c = cstring("fstype", fstype)?;
    let data_c = cstring("data", data.unwrap_or(""))?;

    mount(source, target, fstype_c.as_c_str(), flags, data_c.as_c_str())
        .map_err(|e| WslKitError::kernel("mount", e.raw_os_error()))?;

    if propagation != MountPropagation::Unspecified {
        if let Err(e) = mount_change(target, propagation.to_flags()) {
            // A failed propagation change must not leave the new mount
            // behind.
            let _ = unmount(target, UnmountFlags::DETACH);
            return Err(WslKitError::kernel("mount", e.raw_os_error()));
        }
    }

    Ok(())
}

/// Bind mount the directory at `source` onto the mount point `target`,
/// optionally replicating the whole subtree beneath it.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] for empty arguments or
/// [`WslKitError::Kernel`] if the mount(2) call fails.
#[cfg(target_os = "linux")]
pub fn bind_mount(source: &Path, target: &Path, recursive: bool) -> WslKitResult<()> {
    use rustix::mount::mount;

    require_path("source", source)?;
    require_path("target", target)?;

    let flags = bind_flags(recursive);

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        recursive,
        ?flags,
        "creating bind mount"
    );

    mount(source, target, c"", flags, c"")
        .map_err(|e| WslKitError::kernel("mount", e.raw_os_error()))
}

/// Change how mount events propagate at the mount point `target`,
/// optionally for the whole subtree beneath it.
///
/// [`MountPropagation::Unspecified`] is a true no-op: the call succeeds
/// trivially without invoking the kernel.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] for an empty target or
/// [`WslKitError::Kernel`] if the mount(2) call fails.
#[cfg(target_os = "linux")]
pub fn change_mount_propagation(
    target: &Path,
    propagation: MountPropagation,
    recursive: bool,
) -> WslKitResult<()> {
    use rustix::mount::mount_change;

    require_path("target", target)?;

    if propagation == MountPropagation::Unspecified {
        tracing::debug!(target = %target.display(), "propagation unspecified; nothing to do");
        return Ok(());
    }

    let flags = propagation_flags(propagation, recursive);

    tracing::debug!(target = %target.display(), ?flags, "changing mount propagation");

    mount_change(target, flags).map_err(|e| WslKitError::kernel("mount", e.raw_os_error()))
}

/// Atomically move the mount at `old_target` to `new_target`.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] for empty arguments or
/// [`WslKitError::Kernel`] if the mount(2) call fails.
#[cfg(target_os = "linux")]
pub fn move_mount(old_target: &Path, new_target: &Path) -> WslKitResult<()> {
    use rustix::mount::mount_move;

    require_path("old_target", old_target)?;
    require_path("new_target", new_target)?;

    tracing::debug!(
        old_target = %old_target.display(),
        new_target = %new_target.display(),
        "moving mount"
    );

    mount_move(old_target, new_target).map_err(|e| WslKitError::kernel("mount", e.raw_os_error()))
}

/// Change the options of the already-mounted filesystem at `target`
/// without unmounting it.
///
/// With `per_mount_point_only`, only the per-mount-point flags of this
/// mount point change (the bind bit is ORed in alongside the remount
/// bit); the underlying filesystem is left alone.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] for an empty target,
/// [`WslKitError::ConflictingOptions`] for an invalid option set, or
/// [`WslKitError::Kernel`] if the mount(2) call fails.
#[cfg(target_os = "linux")]
pub fn remount(
    target: &Path,
    options: MountOptions,
    data: Option<&str>,
    per_mount_point_only: bool,
) -> WslKitResult<()> {
    use rustix::mount::mount_remount;

    require_path("target", target)?;

    let flags = remount_flags(options, per_mount_point_only)?;

    tracing::debug!(
        target = %target.display(),
        per_mount_point_only,
        ?flags,
        "remounting filesystem"
    );

    let data_c = cstring("data", data.unwrap_or(""))?;

    mount_remount(target, flags, data_c.as_c_str())
        .map_err(|e| WslKitError::kernel("mount", e.raw_os_error()))
}

/// Unmount the filesystem at `target` with detached (lazy) semantics:
/// the mount point is disconnected immediately, final cleanup waits until
/// the filesystem is no longer busy.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] for an empty target or
/// [`WslKitError::Kernel`] if the umount2(2) call fails.
#[cfg(target_os = "linux")]
pub fn unmount(target: &Path) -> WslKitResult<()> {
    use rustix::mount::{UnmountFlags, unmount};

    require_path("target", target)?;

    tracing::debug!(target = %target.display(), "unmounting (detached)");

    unmount(target, UnmountFlags::DETACH)
        .map_err(|e| WslKitError::kernel("umount2", e.raw_os_error()))
}

#[cfg(target_os = "linux")]
fn bind_flags(recursive: bool) -> rustix::mount::MountFlags {
    use rustix::mount::MountFlags;

    let mut flags = MountFlags::BIND;
    if recursive {
        flags |= MountFlags::REC;
    }
    flags
}

#[cfg(target_os = "linux")]
fn propagation_flags(
    propagation: MountPropagation,
    recursive: bool,
) -> rustix::mount::MountPropagationFlags {
    use rustix::mount::MountPropagationFlags;

    let mut flags = propagation.to_flags();
    if recursive {
        flags |= MountPropagationFlags::REC;
    }
    flags
}

// The remount bit itself is contributed by rustix's mount_remount; this
// assembles everything that rides alongside it.
#[cfg(target_os = "linux")]
fn remount_flags(
    options: MountOptions,
    per_mount_point_only: bool,
) -> WslKitResult<rustix::mount::MountFlags> {
    use rustix::mount::MountFlags;

    let mut flags = options.to_flags()?;
    if per_mount_point_only {
        flags |= MountFlags::BIND;
    }
    Ok(flags)
}

#[cfg(target_os = "linux")]
fn cstring(name: &'static str, value: &str) -> WslKitResult<std::ffi::CString> {
    std::ffi::CString::new(value).map_err(|_| WslKitError::InvalidArgument {
        name,
        reason: "value contains an interior NUL byte",
    })
}

#[cfg(not(target_os = "linux"))]
mod stubs {
    use super::{MountOptions, MountPropagation};
    use std::path::Path;
    use wslkit_common::{WslKitError, WslKitResult};

    fn unsupported<T>() -> WslKitResult<T> {
        Err(WslKitError::Unsupported {
            feature: "mount operations".to_string(),
        })
    }

    /// Stub for non-Linux platforms; always fails.
    pub fn mount(
        _source: &Path,
        _target: &Path,
        _fstype: &str,
        _options: MountOptions,
        _propagation: MountPropagation,
        _data: Option<&str>,
    ) -> WslKitResult<()> {
        unsupported()
    }

    /// Stub for non-Linux platforms; always fails.
    pub fn bind_mount(_source: &Path, _target: &Path, _recursive: bool) -> WslKitResult<()> {
        unsupported()
    }

    /// Stub for non-Linux platforms; always fails.
    pub fn change_mount_propagation(
        _target: &Path,
        _propagation: MountPropagation,
        _recursive: bool,
    ) -> WslKitResult<()> {
        unsupported()
    }

    /// Stub for non-Linux platforms; always fails.
    pub fn move_mount(_old_target: &Path, _new_target: &Path) -> WslKitResult<()> {
        unsupported()
    }

    /// Stub for non-Linux platforms; always fails.
    pub fn remount(
        _target: &Path,
        _options: MountOptions,
        _data: Option<&str>,
        _per_mount_point_only: bool,
    ) -> WslKitResult<()> {
        unsupported()
    }

    /// Stub for non-Linux platforms; always fails.
    pub fn unmount(_target: &Path) -> WslKitResult<()> {
        unsupported()
    }
}

#[cfg(not(target_os = "linux"))]
pub use stubs::{bind_mount, change_mount_propagation, mount, move_mount, remount, unmount};

//! Mount option and propagation-type encoding.
//!
//! Pure translation from named options to mount(2) flag bits; no kernel
//! call happens in this module, which keeps the encoders independently
//! testable.

#[cfg(target_os = "linux")]
use rustix::mount::{MountFlags, MountPropagationFlags};
#[cfg(target_os = "linux")]
use wslkit_common::{WslKitError, WslKitResult};

/// Standard Linux (i.e., not filesystem-specific) mount options.
///
/// Each field contributes one mount(2) flag. The three access-time
/// policies (`no_access_times`, `relative_access_time`,
/// `strict_access_time`) are alternative ways to relax or enforce atime
/// updates. Setting more than one is a caller error, detected before any
/// kernel call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountOptions {
    /// Make directory changes on this filesystem synchronous.
    pub directory_sync: bool,
    /// Permit mandatory locking on files in this filesystem.
    pub mandatory_locking: bool,
    /// Do not update access times for any type of file.
    pub no_access_times: bool,
    /// Do not allow access to device special files.
    pub no_device_access: bool,
    /// Do not update access times for directories. A subset of
    /// `no_access_times`, which implies it.
    pub no_directory_access_times: bool,
    /// Do not allow programs to be executed from this filesystem.
    pub no_executables: bool,
    /// Do not honor set-user-ID/set-group-ID bits or file capabilities
    /// when executing programs.
    pub no_setuid: bool,
    /// Mount the filesystem read-only.
    pub read_only: bool,
    /// Update atime only if it is older than mtime or ctime.
    pub relative_access_time: bool,
    /// Suppress certain printk() warnings in the kernel log.
    pub silence_warnings: bool,
    /// Always update atime on access.
    pub strict_access_time: bool,
    /// Make all writes on this filesystem synchronous.
    pub synchronous_writes: bool,
}

#[cfg(target_os = "linux")]
impl MountOptions {
    /// Encode this option set as its mount(2) flag bits.
    ///
    /// # Errors
    ///
    /// Returns [`WslKitError::ConflictingOptions`] if more than one
    /// access-time policy is set. No option is silently dropped or picked.
    pub fn to_flags(self) -> WslKitResult<MountFlags> {
        let atime_policies = usize::from(self.no_access_times)
            + usize::from(self.relative_access_time)
            + usize::from(self.strict_access_time);
        if atime_policies > 1 {
            return Err(WslKitError::ConflictingOptions {
                group: "no_access_times, relative_access_time, strict_access_time",
            });
        }

        let mut flags = MountFlags::empty();
        if self.directory_sync {
            flags |= MountFlags::DIRSYNC;
        }
        if self.mandatory_locking {
            flags |= MountFlags::PERMIT_MANDATORY_FILE_LOCKING;
        }
        if self.no_access_times {
            flags |= MountFlags::NOATIME;
        }
        if self.no_device_access {
            flags |= MountFlags::NODEV;
        }
        if self.no_directory_access_times {
            flags |= MountFlags::NODIRATIME;
        }
        if self.no_executables {
            flags |= MountFlags::NOEXEC;
        }
        if self.no_setuid {
            flags |= MountFlags::NOSUID;
        }
        if self.read_only {
            flags |= MountFlags::RDONLY;
        }
        if self.relative_access_time {
            flags |= MountFlags::RELATIME;
        }
        if self.silence_warnings {
            flags |= MountFlags::SILENT;
        }
        if self.strict_access_time {
            flags |= MountFlags::STRICTATIME;
        }
        if self.synchronous_writes {
            flags |= MountFlags::SYNCHRONOUS;
        }
        Ok(flags)
    }
}

/// How mount and unmount events at a mount point propagate to or from
/// peer mount points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountPropagation {
    /// No propagation change requested. Contributes no flag bits, and a
    /// standalone propagation change with this value is a no-op that
    /// succeeds without touching the kernel.
    #[default]
    Unspecified,
    /// Share mount and unmount events with the mount's peer group, in
    /// both directions.
    Shared,
    /// Do not propagate mount and unmount events into or out of this
    /// mount point.
    Private,
    /// Receive events from the former (master) peer group without
    /// propagating events back to it.
    Slave,
    /// Like private, and additionally the mount refuses to be bind
    /// mounted; recursive bind mounts prune it.
    Unbindable,
}

#[cfg(target_os = "linux")]
impl MountPropagation {
    /// Encode this propagation type as its mount(2) flag contribution.
    ///
    /// [`MountPropagation::Unspecified`] contributes nothing; the result
    /// is composable with the recursion bit by OR.
    #[must_use]
    pub fn to_flags(self) -> MountPropagationFlags {
        match self {
            Self::Unspecified => MountPropagationFlags::empty(),
            Self::Shared => MountPropagationFlags::SHARED,
            Self::Private => MountPropagationFlags::PRIVATE,
            Self::Slave => MountPropagationFlags::DOWNSTREAM,
            Self::Unbindable => MountPropagationFlags::UNBINDABLE,
        }
    }
}

//! Environment detection for the WSL platform.
//!
//! Every predicate reads live kernel state on each call and must not be
//! cached: the root filesystem type is mount-namespace state that this
//! very library can change.

use std::path::Path;

use wslkit_common::{WslKitError, WslKitResult};

const PROC_MOUNTS: &str = "/proc/self/mounts";
const OSRELEASE: &str = "/proc/sys/kernel/osrelease";
const WSL2_RUN_DIR: &str = "/run/WSL";

/// Filesystem types the root is mounted with under WSL 1.
const WSL1_ROOT_FSTYPES: [&str; 2] = ["lxfs", "wslfs"];

/// Are we running on the Linux platform at all?
#[must_use]
pub const fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// Are we running under WSL 1?
///
/// WSL 1 is detected by the type of the root filesystem: `lxfs` or
/// `wslfs`.
///
/// # Errors
///
/// Returns [`WslKitError::Io`] if `/proc/self/mounts` cannot be read, or
/// [`WslKitError::Detection`] if its contents cannot be interpreted.
pub fn is_wsl1() -> WslKitResult<bool> {
    let mounts = std::fs::read_to_string(PROC_MOUNTS)?;
    let fstype = root_fstype(&mounts)?;
    Ok(WSL1_ROOT_FSTYPES.contains(&fstype.as_str()))
}

/// Are we running under WSL 2?
///
/// True if the `/run/WSL` sentinel directory exists, or if the kernel
/// release string carries the `microsoft` marker.
///
/// # Errors
///
/// Returns [`WslKitError::Io`] if `/proc/sys/kernel/osrelease` cannot be
/// read.
pub fn is_wsl2() -> WslKitResult<bool> {
    if Path::new(WSL2_RUN_DIR).is_dir() {
        return Ok(true);
    }

    let osrelease = std::fs::read_to_string(OSRELEASE)?;
    Ok(osrelease.to_ascii_lowercase().contains("microsoft"))
}

/// Extract the root filesystem type from mounts(5)-formatted text.
fn root_fstype(mounts: &str) -> WslKitResult<String> {
    for line in mounts.lines() {
        let fields: Vec<&str> = line.split(' ').collect();

        if fields.len() < 6 {
            return Err(WslKitError::Detection {
                message: "mounts format error; cannot determine filesystem type".to_string(),
            });
        }

        if fields[1] == "/" {
            return Ok(fields[2].to_string());
        }
    }

    Err(WslKitError::Detection {
        message: "mounts format error; cannot find root filesystem mount".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WSL1_MOUNTS: &str = "\
rootfs / lxfs rw,noatime 0 0
none /dev tmpfs rw,noatime,mode=755 0 0
sysfs /sys sysfs rw,nosuid,nodev,noexec,noatime 0 0";

    const EXT4_MOUNTS: &str = "\
/dev/sda2 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0";

    #[test]
    fn root_fstype_finds_the_root_entry() {
        assert_eq!(root_fstype(WSL1_MOUNTS).unwrap(), "lxfs");
        assert_eq!(root_fstype(EXT4_MOUNTS).unwrap(), "ext4");
    }

    #[test]
    fn short_mounts_line_is_a_detection_failure() {
        let broken = "rootfs / lxfs\n";
        assert!(matches!(
            root_fstype(broken),
            Err(WslKitError::Detection { .. })
        ));
    }

    #[test]
    fn missing_root_entry_is_a_detection_failure() {
        let no_root = "proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0\n";
        assert!(matches!(
            root_fstype(no_root),
            Err(WslKitError::Detection { .. })
        ));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn live_detection_answers_on_linux() {
        assert!(is_linux());
        // The answers depend on the environment; they must only be readable.
        let _ = is_wsl1().unwrap();
        let _ = is_wsl2().unwrap();
    }
}

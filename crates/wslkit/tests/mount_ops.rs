//! Integration tests for the mount operation surface.
//!
//! Scenarios that actually touch the mount table need root and skip
//! themselves otherwise; the validation and short-circuit contracts are
//! exercised unprivileged.

#![cfg(target_os = "linux")]

use std::path::Path;

use wslkit::mount::{self, MountOptions, MountPropagation};
use wslkit::{WslKitError, creds, fstype};

fn require_root(test: &str) -> bool {
    if creds::is_effectively_root() {
        return true;
    }
    eprintln!("skipping {test}: requires root");
    false
}

#[test]
fn empty_arguments_are_rejected_before_any_syscall() {
    let results = [
        mount::mount(
            Path::new(""),
            Path::new("/mnt"),
            fstype::TEMPORARY,
            MountOptions::default(),
            MountPropagation::Unspecified,
            None,
        ),
        mount::mount(
            Path::new("tmpfs"),
            Path::new("/mnt"),
            "",
            MountOptions::default(),
            MountPropagation::Unspecified,
            None,
        ),
        mount::bind_mount(Path::new("/srv"), Path::new(""), false),
        mount::change_mount_propagation(Path::new(""), MountPropagation::Shared, false),
        mount::move_mount(Path::new(""), Path::new("/mnt/new")),
        mount::remount(Path::new(""), MountOptions::default(), None, false),
        mount::unmount(Path::new("")),
    ];

    for result in results {
        assert!(
            matches!(result, Err(WslKitError::InvalidArgument { .. })),
            "expected invalid-argument, got {result:?}"
        );
    }
}

#[test]
fn conflicting_options_fail_before_any_syscall() {
    // The target does not even exist; a kernel call would report ENOENT,
    // not a conflicting-options error.
    let result = mount::mount(
        Path::new("tmpfs"),
        Path::new("/nonexistent/wslkit/mount/target"),
        fstype::TEMPORARY,
        MountOptions {
            no_access_times: true,
            relative_access_time: true,
            ..MountOptions::default()
        },
        MountPropagation::Unspecified,
        None,
    );
    assert!(matches!(
        result,
        Err(WslKitError::ConflictingOptions { .. })
    ));
}

#[test]
fn unspecified_propagation_never_reaches_the_kernel() {
    // The path does not exist, so any kernel call would fail; success
    // proves the short-circuit.
    let result = mount::change_mount_propagation(
        Path::new("/nonexistent/wslkit/mount/target"),
        MountPropagation::Unspecified,
        true,
    );
    assert!(result.is_ok());
}

#[test]
fn kernel_failures_carry_errno_and_description() {
    let result = mount::mount(
        Path::new("tmpfs"),
        Path::new("/nonexistent/wslkit/mount/target"),
        fstype::TEMPORARY,
        MountOptions::default(),
        MountPropagation::Unspecified,
        None,
    );
    match result {
        Err(WslKitError::Kernel {
            operation,
            errno,
            message,
        }) => {
            assert_eq!(operation, "mount");
            assert!(errno > 0);
            assert!(!message.is_empty());
        }
        other => panic!("expected kernel failure, got {other:?}"),
    }
}

#[test_log::test]
fn tmpfs_mount_and_unmount_round_trip() {
    if !require_root("tmpfs_mount_and_unmount_round_trip") {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    mount::mount(
        Path::new("tmpfs"),
        dir.path(),
        fstype::TEMPORARY,
        MountOptions {
            read_only: true,
            ..MountOptions::default()
        },
        MountPropagation::Unspecified,
        Some("size=1m"),
    )
    .unwrap();

    // Read-only must be in effect on the mounted filesystem.
    assert!(std::fs::write(dir.path().join("probe"), b"x").is_err());

    mount::unmount(dir.path()).unwrap();

    // Back to the prior state: the underlying tempdir is writable again.
    std::fs::write(dir.path().join("probe"), b"x").unwrap();
}

#[test_log::test]
fn mount_with_propagation_applies_both_steps() {
    if !require_root("mount_with_propagation_applies_both_steps") {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    mount::mount(
        Path::new("tmpfs"),
        dir.path(),
        fstype::TEMPORARY,
        MountOptions::default(),
        MountPropagation::Shared,
        Some("size=1m"),
    )
    .unwrap();

    // The mount is in place and usable after the propagation step.
    std::fs::write(dir.path().join("probe"), b"x").unwrap();

    mount::unmount(dir.path()).unwrap();
    assert!(!dir.path().join("probe").exists());
}

#[test_log::test]
fn propagation_change_round_trip() {
    if !require_root("propagation_change_round_trip") {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    mount::mount(
        Path::new("tmpfs"),
        dir.path(),
        fstype::TEMPORARY,
        MountOptions::default(),
        MountPropagation::Private,
        Some("size=1m"),
    )
    .unwrap();

    mount::change_mount_propagation(dir.path(), MountPropagation::Shared, true).unwrap();
    // Unspecified afterwards is a no-op success, not a kernel call.
    mount::change_mount_propagation(dir.path(), MountPropagation::Unspecified, false).unwrap();

    mount::unmount(dir.path()).unwrap();
}

#[test_log::test]
fn recursive_bind_mount_round_trip() {
    if !require_root("recursive_bind_mount_round_trip") {
        return;
    }

    let source = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    std::fs::write(source.path().join("marker"), b"bound").unwrap();

    mount::bind_mount(source.path(), target.path(), true).unwrap();
    assert_eq!(
        std::fs::read(target.path().join("marker")).unwrap(),
        b"bound"
    );

    mount::unmount(target.path()).unwrap();
    assert!(!target.path().join("marker").exists());
}

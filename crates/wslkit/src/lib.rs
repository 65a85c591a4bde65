//! # WslKit
//!
//! Typed, safe helpers over the Linux kernel facilities needed to manage a
//! WSL (Windows Subsystem for Linux) environment:
//!
//! - **Mounting**: mount, bind mount, remount, move mount, unmount, and
//!   mount propagation control
//! - **Filesystem**: symbolic link creation
//! - **Host**: hostname retrieval and assignment
//! - **Credentials**: real/effective UID and GID predicates
//! - **Platform**: Linux/WSL 1/WSL 2 detection
//!
//! Every operation is a single, independent, blocking kernel call; nothing
//! is cached or retained between calls, so concurrent use from multiple
//! threads is safe at the API level.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use wslkit::mount::{self, MountOptions, MountPropagation};
//!
//! # fn main() -> wslkit::WslKitResult<()> {
//! mount::mount(
//!     Path::new("tmpfs"),
//!     Path::new("/mnt/scratch"),
//!     wslkit::fstype::TEMPORARY,
//!     MountOptions {
//!         read_only: true,
//!         ..MountOptions::default()
//!     },
//!     MountPropagation::Unspecified,
//!     None,
//! )?;
//! mount::unmount(Path::new("/mnt/scratch"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod args;

pub mod creds;
pub mod fs;
pub mod host;
pub mod mount;
pub mod platform;

pub use wslkit_common::fstype;
pub use wslkit_common::{WslKitError, WslKitResult};

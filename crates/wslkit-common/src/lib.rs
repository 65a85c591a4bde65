//! # wslkit-common
//!
//! Shared types for the WslKit crates:
//! - Workspace-wide error type and result alias
//! - Kernel errno translation
//! - Well-known filesystem-type identifiers

#![warn(missing_docs)]

pub mod error;
pub mod fstype;

pub use error::{WslKitError, WslKitResult};

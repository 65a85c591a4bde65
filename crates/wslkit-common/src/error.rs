//! Common error types for the WslKit crates.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`WslKitError`].
pub type WslKitResult<T> = Result<T, WslKitError>;

/// Size of the buffer handed to `strerror_r(3)`. A description that does
/// not fit is truncated, never reallocated.
const STRERROR_BUF_LEN: usize = 1024;

/// Common errors across the WslKit crates.
#[derive(Error, Diagnostic, Debug)]
pub enum WslKitError {
    /// A required argument was empty or missing.
    #[error("invalid argument `{name}`: {reason}")]
    #[diagnostic(code(wslkit::invalid_argument))]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Mutually exclusive mount options were combined.
    #[error("conflicting mount options: at most one of {{{group}}} may be set")]
    #[diagnostic(
        code(wslkit::mount::conflicting_options),
        help("These options are alternative policies; pick at most one")
    )]
    ConflictingOptions {
        /// The mutually exclusive option group, comma separated.
        group: &'static str,
    },

    /// A kernel call failed.
    #[error("{operation} failed: {message} (errno {errno})")]
    #[diagnostic(code(wslkit::kernel))]
    Kernel {
        /// The syscall that failed.
        operation: &'static str,
        /// The raw error code reported by the kernel.
        errno: i32,
        /// System-provided description of the error code.
        message: String,
    },

    /// Environment detection could not interpret kernel-exposed state.
    #[error("platform detection failed: {message}")]
    #[diagnostic(code(wslkit::platform::detection))]
    Detection {
        /// What could not be interpreted.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    #[diagnostic(code(wslkit::io))]
    Io(#[from] std::io::Error),

    /// Feature not supported on this platform.
    #[error("feature not supported: {feature}")]
    #[diagnostic(
        code(wslkit::unsupported),
        help("This functionality requires Linux")
    )]
    Unsupported {
        /// The unsupported feature.
        feature: String,
    },
}

impl WslKitError {
    /// Build a [`WslKitError::Kernel`] for `operation` from a raw errno.
    ///
    /// The description is looked up with the thread-safe `strerror_r(3)`
    /// into a fixed buffer. If the lookup itself fails, the description
    /// degrades to a fallback that still names the original code; the
    /// errno is never lost.
    #[must_use]
    pub fn kernel(operation: &'static str, errno: i32) -> Self {
        Self::Kernel {
            operation,
            errno,
            message: strerror(errno),
        }
    }
}

/// Translate an errno into its system-provided description.
fn strerror(errno: i32) -> String {
    let mut buf = [0u8; STRERROR_BUF_LEN];

    // SAFETY: the buffer's length is passed alongside its pointer and the
    // buffer outlives the call; strerror_r NUL-terminates within it.
    #[allow(unsafe_code)]
    let rc = unsafe {
        libc::strerror_r(
            errno,
            buf.as_mut_ptr().cast::<libc::c_char>(),
            STRERROR_BUF_LEN,
        )
    };

    if rc != 0 {
        return format!("unable to translate error message for errno {errno}");
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(STRERROR_BUF_LEN);
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

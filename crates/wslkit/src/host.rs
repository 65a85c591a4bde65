//! Hostname management for the Linux host (current UTS namespace).

use wslkit_common::{WslKitError, WslKitResult};

use crate::args::require_str;

/// Retrieval buffer size for gethostname(2). Longer hostnames are
/// truncated by the kernel, never reallocated here.
const HOSTNAME_BUF_LEN: usize = 64;

/// Return the system hostname.
///
/// # Errors
///
/// Returns [`WslKitError::Kernel`] if the gethostname(2) call fails.
pub fn hostname() -> WslKitResult<String> {
    let mut buf = [0u8; HOSTNAME_BUF_LEN];

    // SAFETY: the buffer's length is passed alongside its pointer and the
    // buffer outlives the call; gethostname NUL-terminates on success.
    #[allow(unsafe_code)]
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), HOSTNAME_BUF_LEN) };

    if rc != 0 {
        let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
        return Err(WslKitError::kernel("gethostname", errno));
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(HOSTNAME_BUF_LEN);
    Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
}

/// Set the system hostname, effective immediately.
///
/// # Errors
///
/// Returns [`WslKitError::InvalidArgument`] if `hostname` is empty, or
/// [`WslKitError::Kernel`] if the sethostname(2) call fails.
pub fn set_hostname(hostname: &str) -> WslKitResult<()> {
    require_str("hostname", hostname)?;

    tracing::debug!(hostname, "setting system hostname");

    rustix::system::sethostname(hostname.as_bytes())
        .map_err(|e| WslKitError::kernel("sethostname", e.raw_os_error()))
}

//! Well-known filesystem-type identifiers.
//!
//! These are opaque strings naming registered kernel filesystem drivers.
//! They are passed through to mount(2) unvalidated beyond non-emptiness;
//! the kernel is the authority on which drivers exist.

/// Pseudo-filesystem directing executables to the appropriate interpreter.
pub const BINARY_FORMATS: &str = "binfmt_misc";

/// The Common Internet File System, the standard protocol for Windows
/// file and printer sharing.
pub const CIFS: &str = "cifs";

/// The fourth extended filesystem, the default general-purpose Linux
/// filesystem.
pub const EXTENDED4: &str = "ext4";

/// The standard filesystem for optical disk media and .iso images.
pub const ISO9660: &str = "iso9660";

/// The Network File System, versions 1 through 3. For version 4 use
/// [`NFS4`].
pub const NFS: &str = "nfs";

/// The Network File System, version 4. For earlier versions use [`NFS`].
pub const NFS4: &str = "nfs4";

/// The Plan 9 network protocol; under WSL it carries communication across
/// the Windows-Linux boundary.
pub const PLAN9: &str = "9p";

/// Compressed, read-only filesystem images created by mksquashfs.
pub const SQUASH: &str = "squashfs";

/// Memory-backed temporary storage; contents are lost on unmount.
pub const TEMPORARY: &str = "tmpfs";

/// The File Allocation Table filesystem, common on flash media.
pub const VFAT: &str = "vfat";

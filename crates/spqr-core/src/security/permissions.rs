//! Sanitization of permission bits stored in archive entries.

/// Permission bits kept from an entry (rwx for user, group, other).
const PERMISSION_MASK: u32 = 0o777;

/// Owner read/write, always granted.
const OWNER_READ_WRITE: u32 = 0o600;

/// Reduces a stored Unix mode to plain permission bits.
///
/// File-type bits and setuid/setgid/sticky are dropped. Owner read/write is
/// always kept so the extracted file can be truncated by a later run.
///
/// # Examples
///
/// ```
/// use spqr_core::security::sanitize_permissions;
///
/// assert_eq!(sanitize_permissions(0o100_644), 0o644);
/// assert_eq!(sanitize_permissions(0o104_755), 0o755);
/// assert_eq!(sanitize_permissions(0o444), 0o644);
/// ```
#[must_use]
pub const fn sanitize_permissions(mode: u32) -> u32 {
    (mode & PERMISSION_MASK) | OWNER_READ_WRITE
}

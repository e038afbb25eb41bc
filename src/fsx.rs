//! Cross-platform filesystem wrapper.
//!
//! On Unix these helpers call straight into `std::fs` with `PermissionsExt`.
//! On other platforms POSIX permission bits do not exist: reads report an
//! empty mode and writes are no-ops, so the rest of the crate never touches
//! `std::os::unix` directly and call-sites stay identical across OSes.

use std::fs::Metadata;
use std::io;
use std::path::Path;

#[cfg(unix)]
/// Reads the low 9 permission bits from an entry's metadata.
pub fn entry_mode(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(unix)]
/// Sets POSIX permission bits, leaving file-type bits untouched.
pub fn set_unix_permissions(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
/// POSIX permission bits are not available on this platform.
pub fn entry_mode(_meta: &Metadata) -> u32 {
    0
}

#[cfg(not(unix))]
/// No-op off Unix: POSIX permission bits are not preserved.
pub fn set_unix_permissions(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

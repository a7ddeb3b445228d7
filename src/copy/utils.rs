//! Utility functions for copy operations.

use std::fs::{self, File, Permissions};
use std::io;
use std::path::Path;

// =============================================================================
// File content copying
// =============================================================================

/// Efficiently copy file contents using the best available method.
///
/// On Linux 4.5+, uses `copy_file_range` for zero-copy kernel-to-kernel transfer.
/// Falls back to `std::io::copy` on other platforms or on error.
pub(crate) fn copy_file_contents(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        copy_file_range_all(src, dst, len)
    }
    #[cfg(not(target_os = "linux"))]
    {
        use std::io::BufReader;
        let _ = len;
        io::copy(&mut BufReader::new(src), &mut &*dst)
    }
}

/// Linux-specific: copy using copy_file_range(2) syscall.
///
/// Falls back to io::copy if copy_file_range fails before any byte moved
/// (e.g., cross-filesystem).
#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    use std::os::unix::io::AsRawFd;

    let src_fd = src.as_raw_fd();
    let dst_fd = dst.as_raw_fd();
    let mut remaining = len;
    let mut copied: u64 = 0;

    while remaining > 0 {
        let chunk_size = remaining.min(128 * 1024 * 1024) as usize;

        // SAFETY: both descriptors are open for the lifetime of the borrows and
        // null offsets make the kernel use (and advance) the file positions.
        let result = unsafe {
            libc::copy_file_range(
                src_fd,
                std::ptr::null_mut(),
                dst_fd,
                std::ptr::null_mut(),
                chunk_size,
                0,
            )
        };

        if result < 0 {
            let err = io::Error::last_os_error();
            if copied == 0
                && matches!(
                    err.raw_os_error(),
                    Some(libc::EXDEV)
                        | Some(libc::ENOSYS)
                        | Some(libc::EINVAL)
                        | Some(libc::EOPNOTSUPP)
                )
            {
                use std::io::BufReader;
                return io::copy(&mut BufReader::new(src), &mut &*dst);
            }
            return Err(err);
        }

        if result == 0 {
            // Source shrank while we were copying
            break;
        }

        let bytes_copied = result as u64;
        copied += bytes_copied;
        remaining = remaining.saturating_sub(bytes_copied);
    }

    // The file may have grown since it was stat'ed
    if remaining == 0 {
        use std::io::BufReader;
        copied += io::copy(&mut BufReader::new(src), &mut &*dst)?;
    }

    Ok(copied)
}

// =============================================================================
// Directory utilities
// =============================================================================

/// Create `path` as a new directory, failing if anything already exists there.
///
/// With `owner_only` set the directory starts out 0o700 on Unix, so the caller
/// can populate it before applying the final mode with [`set_mode`].
/// Otherwise it gets the default mode filtered through the umask.
pub(crate) fn create_dir_new(path: &Path, owner_only: bool) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    if owner_only {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    #[cfg(not(unix))]
    let _ = owner_only;
    builder.create(path)
}

/// Apply `perms` to `path`.
#[inline]
pub(crate) fn set_mode(path: &Path, perms: Permissions) -> io::Result<()> {
    fs::set_permissions(path, perms)
}

// =============================================================================
// Tests
// =============================================================================

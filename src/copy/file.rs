//! Single file copy.
//!
//! Files are written to a temporary sibling of the destination and moved
//! into place with a no-replace rename, so a destination is either absent or
//! complete, and two copiers racing for the same path cannot both win.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::probe::require_file;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use super::utils::copy_file_contents;

/// Copy a single file, refusing to overwrite.
///
/// The mode bits of `src` are applied to the new file before any byte is
/// written (unless [`CopyOptions::preserve_permissions`] is off).
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path, which must not exist
/// * `options` - Copy options
///
/// # Returns
///
/// The number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - Source is a directory ([`Error::NotAFile`])
/// - Destination exists, or appears while copying ([`Error::AlreadyExists`])
/// - IO operations fail ([`Error::Io`])
/// - Temp file creation fails ([`Error::TempFile`])
/// - Final rename fails ([`Error::Persist`])
///
/// # Example
///
/// ```no_run
/// use filekit::{copy_file, CopyOptions};
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("a.txt"), Path::new("b.txt"), &CopyOptions::default())?;
/// println!("copied {bytes} bytes");
/// # Ok::<(), filekit::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    let src_meta = require_file(src)?;

    let src_file = File::open(src)?;

    // Cheap early exit; the no-replace rename below is what actually enforces it
    match fs::symlink_metadata(dst) {
        Ok(_) => return Err(Error::AlreadyExists(dst.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let dst_parent = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".filekit");
    #[cfg(unix)]
    if !options.preserve_permissions {
        use std::os::unix::fs::PermissionsExt;
        // 0o666 filtered through the umask, like a plain create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let temp_file = builder
        .tempfile_in(dst_parent)
        .map_err(|e| Error::TempFile {
            path: dst_parent.to_path_buf(),
            source: e,
        })?;

    if options.preserve_permissions {
        temp_file.as_file().set_permissions(src_meta.permissions())?;
    }

    let bytes_copied = copy_file_contents(&src_file, temp_file.as_file(), src_meta.len())?;

    if options.fsync {
        temp_file.as_file().sync_all()?;
    }

    temp_file.persist_noclobber(dst).map_err(|e| {
        if e.error.kind() == io::ErrorKind::AlreadyExists {
            Error::AlreadyExists(dst.to_path_buf())
        } else {
            Error::Persist {
                path: dst.to_path_buf(),
                source: e.error,
            }
        }
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        bytes = bytes_copied,
        "copied file"
    );

    Ok(bytes_copied)
}

// =============================================================================
// Tests
// =============================================================================

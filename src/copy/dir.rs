//! Recursive directory copy.
//!
//! The walk is depth-first and fail-fast: the first error from any entry
//! aborts the whole copy. Nothing already written is removed.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::probe::{read_entries, require_dir};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use super::file::copy_file;
use super::utils::{create_dir_new, set_mode};

/// Statistics from a directory copy.
///
/// Returned by [`copy_dir`].
///
/// # Example
///
/// ```no_run
/// use filekit::{copy_dir, CopyOptions};
/// use std::path::Path;
///
/// let stats = copy_dir(Path::new("src"), Path::new("dst"), &CopyOptions::default())?;
/// println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
/// # Ok::<(), filekit::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of directories created, including the root
    pub dirs_created: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

/// Copy the directory tree at `src` to a new directory `dst`.
///
/// Subdirectories are recreated and every other entry is handed to
/// [`copy_file`](crate::copy_file), which follows symlinks. Entries are
/// visited in name order unless [`CopyOptions::sort_entries`] is off.
///
/// Each directory receives the source's mode bits once its contents are in
/// place, so read-only source directories can still be mirrored.
///
/// # Errors
///
/// Returns an error if:
/// - Source is not a directory ([`Error::NotADirectory`])
/// - Destination already exists ([`Error::AlreadyExists`])
/// - Any nested file or directory copy fails; the walk stops there and the
///   partially copied tree is left in place
pub fn copy_dir(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start_time = Instant::now();
    let mut stats = CopyStats::default();

    copy_dir_recursive(src, dst, options, &mut stats)?;

    stats.duration = start_time.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        files = stats.files_copied,
        dirs = stats.dirs_created,
        bytes = stats.bytes_copied,
        "copied directory"
    );

    Ok(stats)
}

fn copy_dir_recursive(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    stats: &mut CopyStats,
) -> Result<()> {
    let src_meta = require_dir(src)?;

    create_dir_new(dst, options.preserve_permissions).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            Error::AlreadyExists(dst.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;
    stats.dirs_created += 1;

    for entry in read_entries(src, options.sort_entries)? {
        let src_path = src.join(&entry.name);
        let dst_path = dst.join(&entry.name);

        if entry.is_dir {
            copy_dir_recursive(&src_path, &dst_path, options, stats)?;
        } else {
            stats.bytes_copied += copy_file(&src_path, &dst_path, options)?;
            stats.files_copied += 1;
        }
    }

    if options.preserve_permissions {
        set_mode(dst, src_meta.permissions())?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

//! Recursive directory equality.

use crate::error::Result;
use crate::options::CompareOptions;
use crate::probe::{read_entries, require_dir};
use std::path::Path;

use super::file::files_equal;

/// Whether the tree at `dst` contains everything in the tree at `src`.
///
/// Only the entries of `src` drive the walk: each one must exist at the
/// same relative path under `dst`, subdirectories are compared recursively,
/// and everything else is compared with [`files_equal`](crate::files_equal).
///
/// **The comparison is one-sided.** Entries that exist only under `dst` are
/// never looked at, so a `dst` that is a strict superset of `src` still
/// compares equal. Call it in both directions for a symmetric check.
///
/// The walk stops at the first mismatch (`Ok(false)`) or the first error.
///
/// # Errors
///
/// Returns an error if:
/// - `src` or `dst` (or a nested counterpart) is not a directory
///   ([`Error::NotADirectory`](crate::Error::NotADirectory))
/// - A path is unreachable or unreadable ([`Error::Io`](crate::Error::Io)),
///   including a file in `src` with no counterpart in `dst`
pub fn dirs_equal(src: &Path, dst: &Path, options: &CompareOptions) -> Result<bool> {
    require_dir(src)?;
    require_dir(dst)?;

    for entry in read_entries(src, options.sort_entries)? {
        let src_path = src.join(&entry.name);
        let dst_path = dst.join(&entry.name);

        let same = if entry.is_dir {
            dirs_equal(&src_path, &dst_path, options)?
        } else {
            files_equal(&src_path, &dst_path, options)?
        };

        if !same {
            #[cfg(feature = "tracing")]
            tracing::debug!(src = %src_path.display(), dst = %dst_path.display(), "trees differ");
            return Ok(false);
        }
    }

    Ok(true)
}

//! Existence and type checks, and directory listings.
//!
//! [`exists`] is the lenient check exposed to callers. The `require_*`
//! helpers are the strict variants used by copy and compare routines: they
//! surface the underlying I/O error when the path is unreachable and a
//! structural error when the path has the wrong type.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::path::Path;

/// Whether anything exists at `path`.
///
/// Follows symlinks. Every error (missing path, permission denied on a
/// parent, ...) is reported as "does not exist".
///
/// # Example
///
/// ```no_run
/// use filekit::exists;
/// use std::path::Path;
///
/// if !exists(Path::new("/tmp/out")) {
///     println!("free to create");
/// }
/// ```
#[inline]
pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Metadata of `path`, which must not be a directory.
pub(crate) fn require_file(path: &Path) -> Result<Metadata> {
    let meta = fs::metadata(path)?;
    if meta.is_dir() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }
    Ok(meta)
}

/// Metadata of `path`, which must be a directory.
pub(crate) fn require_dir(path: &Path) -> Result<Metadata> {
    let meta = fs::metadata(path)?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(meta)
}

/// A name in a directory listing and whether it is a directory.
///
/// The type comes from the listing itself and does not follow symlinks, so a
/// link to a directory is reported as a non-directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub name: OsString,
    pub is_dir: bool,
}

/// List the entries of `dir`, sorted by name when `sorted` is set.
pub(crate) fn read_entries(dir: &Path, sorted: bool) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(Entry {
            name: entry.file_name(),
            is_dir: entry.file_type()?.is_dir(),
        });
    }

    if sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(entries)
}

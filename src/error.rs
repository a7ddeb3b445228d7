//! Error types for filekit.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy, digest, and compare operations, and the
//! [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | IO | [`Error::Io`], [`Error::TempFile`], [`Error::Persist`] |
//! | Structure | [`Error::NotAFile`], [`Error::NotADirectory`] |
//! | Conflict | [`Error::AlreadyExists`] |
//!
//! Underlying I/O errors are carried as-is; nothing is retried.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for filekit operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use filekit::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Errors that can occur during filekit operations.
///
/// Structural errors carry the offending path. I/O errors from the
/// filesystem are propagated verbatim through [`Error::Io`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path was expected to be a file but is a directory
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Path was expected to be a directory but is not
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Destination already exists (copies never overwrite)
    #[error("Destination already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Failed to create temporary file
    #[error("Failed to create temporary file in {path}: {source}")]
    TempFile {
        /// Directory where temp file creation was attempted
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to move the temporary file into place
    #[error("Failed to persist temporary file to {path}: {source}")]
    Persist {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl Error {
    /// Stable classification of this error, suitable for exit codes and
    /// machine-readable output.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(e) | Self::TempFile { source: e, .. } | Self::Persist { source: e, .. } => {
                if is_no_space_error(e) {
                    ErrorCode::NoSpace
                } else {
                    ErrorCode::Io
                }
            }
            Self::NotAFile(_) => ErrorCode::NotAFile,
            Self::NotADirectory(_) => ErrorCode::NotADirectory,
            Self::AlreadyExists(_) => ErrorCode::AlreadyExists,
        }
    }
}

/// Machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorCode {
    /// Filesystem error
    Io,
    /// Destination ran out of space
    NoSpace,
    /// Expected a file, found a directory
    NotAFile,
    /// Expected a directory
    NotADirectory,
    /// No-clobber violation
    AlreadyExists,
}

impl ErrorCode {
    /// String form used in CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::NoSpace => "no_space",
            Self::NotAFile => "not_a_file",
            Self::NotADirectory => "not_a_directory",
            Self::AlreadyExists => "already_exists",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Configuration options for copy and compare operations.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior and
//! [`CompareOptions`] for configuring equality checks.
//!
//! # Example
//!
//! ```
//! use filekit::{Algorithm, CompareOptions, CopyOptions};
//!
//! let copy = CopyOptions::default()
//!     .with_parallel(8)
//!     .with_fsync();
//!
//! let compare = CompareOptions::default().with_algorithm(Algorithm::Sha256);
//! ```

use crate::hash::Algorithm;

/// Options for copy operations.
///
/// Use [`Default::default()`] to get sensible defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `parallel` | 16 | Concurrent fan-out copies |
/// | `preserve_permissions` | `true` | Copy file and directory mode bits |
/// | `fsync` | `false` | Sync to disk after write |
/// | `sort_entries` | `true` | Walk directories in name order |
///
/// Copies never overwrite an existing destination; there is no option to
/// change that.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Number of destinations copied concurrently by
    /// [`copy_file_to_many`](crate::copy_file_to_many) (default: 16)
    pub parallel: usize,

    /// Whether to preserve mode bits of files and directories (default: true)
    pub preserve_permissions: bool,

    /// Whether to sync files to disk before moving them into place (default: false)
    pub fsync: bool,

    /// Visit directory entries sorted by name (default: true)
    ///
    /// When false, entries are visited in whatever order the filesystem
    /// returns them.
    pub sort_entries: bool,

    /// Callback for warnings (optional)
    ///
    /// If not set and `tracing` feature is enabled, warnings are logged via tracing.
    /// Otherwise, warnings are silently ignored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            parallel: 16,
            preserve_permissions: true,
            fsync: false,
            sort_entries: true,
            warn_handler: None,
        }
    }
}

impl CopyOptions {
    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Set the number of parallel operations
    ///
    /// Value is clamped to at least 1 to prevent panics.
    #[must_use]
    pub fn with_parallel(mut self, n: usize) -> Self {
        self.parallel = n.max(1);
        self
    }

    /// Sync every copied file to disk before it becomes visible
    #[must_use]
    pub fn with_fsync(mut self) -> Self {
        self.fsync = true;
        self
    }

    /// Disable permission preservation
    ///
    /// New files and directories then get the default (umask) permissions.
    #[must_use]
    pub fn without_permissions(mut self) -> Self {
        self.preserve_permissions = false;
        self
    }

    /// Visit directory entries in filesystem order instead of sorted
    #[must_use]
    pub fn unsorted(mut self) -> Self {
        self.sort_entries = false;
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}

/// Options for equality checks.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `algorithm` | `Sha1` | Digest used on both sides |
/// | `sort_entries` | `true` | Walk directories in name order |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareOptions {
    /// Digest algorithm applied to both sides of every comparison
    pub algorithm: Algorithm,

    /// Visit directory entries sorted by name (default: true)
    ///
    /// Only affects which mismatch or error is reported first.
    pub sort_entries: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha1,
            sort_entries: true,
        }
    }
}

impl CompareOptions {
    /// Set the digest algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Visit directory entries in filesystem order instead of sorted
    #[must_use]
    pub fn unsorted(mut self) -> Self {
        self.sort_entries = false;
        self
    }
}

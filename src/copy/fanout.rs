//! Copy one source file to many destinations concurrently.

use crate::error::Result;
use crate::options::CopyOptions;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::file::copy_file;

/// Outcome of copying the source to one destination.
#[derive(Debug)]
pub struct FanOutOutcome {
    /// Destination path
    pub dst: PathBuf,
    /// Bytes copied, or why this destination failed
    pub result: Result<u64>,
}

/// Per-destination results of [`copy_file_to_many`], in the order the
/// destinations were given.
#[derive(Debug, Default)]
pub struct FanOutReport {
    /// One outcome per requested destination
    pub outcomes: Vec<FanOutOutcome>,
}

impl FanOutReport {
    /// True if every destination was copied.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Outcome for `dst`, if it was one of the requested destinations.
    #[must_use]
    pub fn get(&self, dst: &Path) -> Option<&FanOutOutcome> {
        self.outcomes.iter().find(|o| o.dst == dst)
    }

    /// Destinations that were copied successfully.
    pub fn succeeded(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_ok())
            .map(|o| o.dst.as_path())
    }

    /// Destinations that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &crate::Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.dst.as_path(), e)))
    }

    /// Total bytes written across all successful destinations.
    #[must_use]
    pub fn bytes_copied(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }
}

/// Copy `src` to every path in `dsts` in parallel.
///
/// Every destination is attempted regardless of how the others fare; the
/// call returns once all of them have finished. Failures are reported
/// through [`CopyOptions::warn_handler`] (or `tracing` when enabled) and are
/// recorded in the returned [`FanOutReport`].
///
/// Destinations are independent: each is written by exactly one worker with
/// its own handles, so there is no shared state between them. Completion
/// order is unspecified.
///
/// # Example
///
/// ```no_run
/// use filekit::{copy_file_to_many, CopyOptions};
/// use std::path::Path;
///
/// let report = copy_file_to_many(
///     Path::new("data.bin"),
///     &["a/data.bin", "b/data.bin", "c/data.bin"],
///     &CopyOptions::default(),
/// );
/// for (dst, err) in report.failures() {
///     eprintln!("{}: {err}", dst.display());
/// }
/// ```
pub fn copy_file_to_many<P: AsRef<Path> + Sync>(
    src: &Path,
    dsts: &[P],
    options: &CopyOptions,
) -> FanOutReport {
    let do_copy = || -> Vec<FanOutOutcome> {
        dsts.par_iter()
            .map(|dst| {
                let dst = dst.as_ref();
                let result = copy_file(src, dst, options);
                if let Err(e) = &result {
                    options.warn(&format!(
                        "Failed to copy {} -> {}: {}",
                        src.display(),
                        dst.display(),
                        e
                    ));
                }
                FanOutOutcome {
                    dst: dst.to_path_buf(),
                    result,
                }
            })
            .collect()
    };

    // Use custom thread pool only if parallelism differs from default
    let outcomes = if options.parallel != rayon::current_num_threads() {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(options.parallel)
            .build()
        {
            Ok(pool) => pool.install(do_copy),
            Err(e) => {
                options.warn(&format!(
                    "Failed to create thread pool ({e}), using global pool"
                ));
                do_copy()
            }
        }
    } else {
        do_copy()
    };

    FanOutReport { outcomes }
}

// =============================================================================
// Tests
// =============================================================================

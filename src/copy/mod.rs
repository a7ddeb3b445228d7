//! Copy operations.
//!
//! This module provides functions for copying a file, fanning one file out
//! to many destinations, and mirroring directory trees. None of them ever
//! overwrite an existing destination.

mod dir;
mod fanout;
mod file;
mod utils;

// Re-export public API
pub use dir::{CopyStats, copy_dir};
pub use fanout::{FanOutOutcome, FanOutReport, copy_file_to_many};
pub use file::copy_file;

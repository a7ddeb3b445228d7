//! Content equality checks.
//!
//! Everything here compares digests, never sizes or timestamps. Checks run
//! sequentially and stop at the first mismatch or error.

mod dir;
mod file;

pub use dir::dirs_equal;
pub use file::{files_equal, files_equal_to_many};

//! # filekit
//!
//! Copy, hash, and compare files and directory trees.
//!
//! ## Core Features
//!
//! - **No-clobber copies**: A copy never replaces an existing destination,
//!   enforced atomically with a no-replace rename
//! - **No partial files**: Data lands in a temp file that is moved into place
//!   only once complete
//! - **Fan-out**: Copy one file to many destinations in parallel with rayon;
//!   every destination is attempted and reported
//! - **Tree mirroring**: Recursive directory copy that keeps mode bits and
//!   stops at the first error
//! - **Content digests**: MD5, SHA-1 and SHA-256 over streamed file contents
//! - **Equality checks**: File, one-to-many, and directory-tree comparison by
//!   digest
//!
//! ## Quick Start
//!
//! ```no_run
//! use filekit::{copy_dir, dirs_equal, CompareOptions, CopyOptions};
//! use std::path::Path;
//!
//! let stats = copy_dir(Path::new("project"), Path::new("backup"), &CopyOptions::default())?;
//! println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//!
//! assert!(dirs_equal(Path::new("project"), Path::new("backup"), &CompareOptions::default())?);
//! # Ok::<(), filekit::Error>(())
//! ```
//!
//! ## Fan-out
//!
//! ```no_run
//! use filekit::{copy_file_to_many, files_equal_to_many, CompareOptions, CopyOptions};
//! use std::path::Path;
//!
//! let dsts = ["mirror1/data.bin", "mirror2/data.bin", "mirror3/data.bin"];
//! let report = copy_file_to_many(Path::new("data.bin"), &dsts, &CopyOptions::default());
//! for (dst, err) in report.failures() {
//!     eprintln!("{}: {err}", dst.display());
//! }
//!
//! let all_same = files_equal_to_many(Path::new("data.bin"), &dsts, &CompareOptions::default())?;
//! # Ok::<(), filekit::Error>(())
//! ```
//!
//! ## Semantics Worth Knowing
//!
//! - [`copy_file_to_many`] attempts every destination; the one-to-many
//!   comparison [`files_equal_to_many`] stops at the first mismatch.
//! - [`dirs_equal`] is one-sided: only entries of the source tree are
//!   checked, so extra files in the destination tree do not make it unequal.
//! - [`copy_dir`] aborts on the first error and leaves whatever it already
//!   copied in place.
//! - Symlinks are followed, never recreated.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for options and [`Algorithm`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod copy;
mod error;
mod hash;
mod options;
mod probe;
mod random;

pub use compare::{dirs_equal, files_equal, files_equal_to_many};
pub use copy::{CopyStats, FanOutOutcome, FanOutReport, copy_dir, copy_file, copy_file_to_many};
pub use error::{Error, ErrorCode, Result, is_no_space_error};
pub use hash::{Algorithm, ParseAlgorithmError, digest};
pub use options::{CompareOptions, CopyOptions};
pub use probe::exists;
pub use random::{RANDOM_BLOCK_SIZE, generate_random_file};

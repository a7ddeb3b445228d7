//! File equality by digest.

use crate::error::Result;
use crate::hash::digest;
use crate::options::CompareOptions;
use std::path::Path;

/// Whether `src` and `dst` have the same content.
///
/// Both files are digested with [`CompareOptions::algorithm`] and the hex
/// strings compared; sizes and timestamps are never consulted. The default
/// SHA-1 is fast but not collision resistant, so treat the answer as
/// advisory rather than a security check.
///
/// # Errors
///
/// Fails with the I/O error of whichever side could not be read.
///
/// # Example
///
/// ```no_run
/// use filekit::{files_equal, CompareOptions};
/// use std::path::Path;
///
/// let same = files_equal(Path::new("a.bin"), Path::new("b.bin"), &CompareOptions::default())?;
/// # Ok::<(), filekit::Error>(())
/// ```
pub fn files_equal(src: &Path, dst: &Path, options: &CompareOptions) -> Result<bool> {
    let src_digest = digest(src, options.algorithm)?;
    let dst_digest = digest(dst, options.algorithm)?;
    Ok(src_digest == dst_digest)
}

/// Whether every path in `dsts` has the same content as `src`.
///
/// `src` is digested once; destinations are then checked one at a time in
/// the order given. The first mismatch returns `Ok(false)` and the first
/// unreadable destination returns its error; destinations after that point
/// are never opened.
///
/// With no destinations the answer is `Ok(true)` (after `src` itself was
/// read successfully).
pub fn files_equal_to_many<P: AsRef<Path>>(
    src: &Path,
    dsts: &[P],
    options: &CompareOptions,
) -> Result<bool> {
    let src_digest = digest(src, options.algorithm)?;

    for dst in dsts {
        let dst = dst.as_ref();
        if digest(dst, options.algorithm)? != src_digest {
            #[cfg(feature = "tracing")]
            tracing::debug!(src = %src.display(), dst = %dst.display(), "content differs");
            return Ok(false);
        }
    }

    Ok(true)
}

//! Random-content files for test fixtures.

use crate::error::Result;
use rand::RngCore;
use rand::rngs::OsRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Size of one block written by [`generate_random_file`].
pub const RANDOM_BLOCK_SIZE: usize = 1024;

/// Create `path` (truncating any existing file) and fill it with `blocks`
/// blocks of [`RANDOM_BLOCK_SIZE`] bytes from the operating system's
/// cryptographic random source.
///
/// # Example
///
/// ```no_run
/// use filekit::generate_random_file;
/// use std::path::Path;
///
/// // 1 MiB of noise
/// generate_random_file(Path::new("fixture.bin"), 1024)?;
/// # Ok::<(), filekit::Error>(())
/// ```
pub fn generate_random_file(path: &Path, blocks: usize) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut block = [0u8; RANDOM_BLOCK_SIZE];

    for _ in 0..blocks {
        OsRng
            .try_fill_bytes(&mut block)
            .map_err(std::io::Error::other)?;
        writer.write_all(&block)?;
    }

    writer.flush()?;
    Ok(())
}

//! Content digests of files.
//!
//! A file's bytes are streamed through the selected hash and the output is
//! rendered as a lowercase hex string. Two digests are only comparable when
//! they were computed with the same [`Algorithm`].

use crate::error::{Error, Result};
use sha2::digest::Digest;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// Read buffer size for streaming hashes
const BUFFER_SIZE: usize = 64 * 1024;

/// Hash function used to fingerprint file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// MD5 (fast, legacy, not collision resistant)
    Md5,
    /// SHA-1 (fast, legacy); the default for equality checks
    #[default]
    Sha1,
    /// SHA-256
    Sha256,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Hash everything `reader` yields.
    pub fn digest_reader<R: Read>(self, reader: R) -> io::Result<String> {
        match self {
            Self::Md5 => hash_stream::<md5::Md5, R>(reader),
            Self::Sha1 => hash_stream::<sha1::Sha1, R>(reader),
            Self::Sha256 => hash_stream::<sha2::Sha256, R>(reader),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown digest algorithm: {0} (expected md5, sha1 or sha256)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Compute the hex digest of the file at `path`.
///
/// The file is read to the end in fixed-size chunks; it is never loaded
/// whole into memory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or a read fails
/// part-way (for example when the file is removed concurrently).
///
/// # Example
///
/// ```no_run
/// use filekit::{Algorithm, digest};
/// use std::path::Path;
///
/// let hex = digest(Path::new("Cargo.toml"), Algorithm::Sha256)?;
/// assert_eq!(hex.len(), 64);
/// # Ok::<(), filekit::Error>(())
/// ```
pub fn digest(path: &Path, algorithm: Algorithm) -> Result<String> {
    let file = File::open(path)?;
    algorithm.digest_reader(file).map_err(Error::from)
}

fn hash_stream<D: Digest, R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

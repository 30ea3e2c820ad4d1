use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::constants::HASH_BLOCK_SIZE;

/// Digest algorithm for a scan run.
///
/// Exactly one algorithm is selected per run; every file in that run is
/// hashed with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Length of the hex-encoded digest this algorithm produces.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        };
        write!(f, "{}", name)
    }
}

/// Running digest state for one file.
///
/// The final value is independent of how the input was split across
/// `update` calls.
pub enum HashContext {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl HashContext {
    /// Create a fresh context for the given algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => HashContext::Md5(Md5::new()),
            HashAlgorithm::Sha1 => HashContext::Sha1(Sha1::new()),
            HashAlgorithm::Sha256 => HashContext::Sha256(Sha256::new()),
            HashAlgorithm::Sha512 => HashContext::Sha512(Sha512::new()),
        }
    }

    /// Fold a chunk of input into the running state.
    pub fn update(&mut self, chunk: &[u8]) {
        match self {
            HashContext::Md5(ctx) => ctx.update(chunk),
            HashContext::Sha1(ctx) => ctx.update(chunk),
            HashContext::Sha256(ctx) => ctx.update(chunk),
            HashContext::Sha512(ctx) => ctx.update(chunk),
        }
    }

    /// Consume the context and return the uppercase hex digest.
    pub fn finalize(self) -> String {
        match self {
            HashContext::Md5(ctx) => format!("{:X}", ctx.finalize()),
            HashContext::Sha1(ctx) => format!("{:X}", ctx.finalize()),
            HashContext::Sha256(ctx) => format!("{:X}", ctx.finalize()),
            HashContext::Sha512(ctx) => format!("{:X}", ctx.finalize()),
        }
    }
}

/// Stream a reader through the selected digest in fixed-size chunks.
///
/// Memory use is bounded by [`HASH_BLOCK_SIZE`] regardless of input length.
pub fn hash_reader<R: Read>(mut reader: R, algorithm: HashAlgorithm) -> io::Result<String> {
    let mut context = HashContext::new(algorithm);
    let mut buffer = vec![0u8; HASH_BLOCK_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        context.update(&buffer[..bytes_read]);
    }

    Ok(context.finalize())
}

/// Open a file and hash its full content.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> io::Result<String> {
    let file = File::open(path)?;
    hash_reader(file, algorithm)
}

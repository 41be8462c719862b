//! File content hashing.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::digest::Output;
use md5::{Digest, Md5};

use crate::error::Result;

/// MD5 digest of a file's full contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(Output<Md5>);

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Compute the content hash of a file.
pub fn hash_file(path: &Path) -> Result<ContentHash> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(ContentHash(hasher.finalize()))
}

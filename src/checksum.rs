//! On-demand MD5 of files on disk.
//!
//! Used to verify a committed download against the digest published next to
//! the firmware image. Runs off the transfer path; reads in chunks so large
//! images keep memory use bounded.

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute MD5 of a file and return the digest as lowercase hex.
pub fn md5_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// True when the file's MD5 equals `expected` (hex, case-insensitive,
/// surrounding whitespace tolerated).
pub fn matches_md5(path: &Path, expected: &str) -> Result<bool> {
    let actual = md5_path(path)?;
    Ok(actual.eq_ignore_ascii_case(expected.trim()))
}

//! Deterministic task identity.
//!
//! A task is identified by its (url, dir_path, file_name) triple alone, so
//! the downloader and any frontend can agree on a key without a lookup
//! table. The derivation is fixed: MD5 of `url<sep>dir<sep>file`, rendered
//! as zero-padded lowercase hex, then folded to 32 bits with the
//! 31-multiplier polynomial string hash under signed wraparound.
//! Identifiers persisted by earlier releases were computed this way; do not
//! change it.
//!
//! Collisions are possible in a 32-bit space and are accepted; the crate
//! does not detect them.

use md5::{Digest, Md5};
use std::path::MAIN_SEPARATOR;

/// Stable 32-bit identifier for a download task.
pub type TaskId = i32;

/// Derives the task identifier for a (url, dir_path, file_name) triple.
/// Pure and total; equal triples always produce equal IDs.
pub fn task_id(url: &str, dir_path: &str, file_name: &str) -> TaskId {
    let key = format!("{url}{MAIN_SEPARATOR}{dir_path}{MAIN_SEPARATOR}{file_name}");
    let hex = hex::encode(Md5::digest(key.as_bytes()));
    string_hash_31(&hex)
}

/// 31-multiplier polynomial hash over the characters of `s`, accumulated
/// with 32-bit two's-complement wraparound. Negative results are valid.
fn string_hash_31(s: &str) -> i32 {
    let mut h: i32 = 0;
    for c in s.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as i32);
    }
    h
}

//! Final and temp path construction.
//!
//! Paths are built by plain separator concatenation from opaque strings;
//! validity of the directory and file name is the caller's problem.
//! `Path::join` is deliberately avoided: an absolute `file_name` would
//! replace the directory instead of nesting under it.

use std::path::{PathBuf, MAIN_SEPARATOR};

/// Temporary file suffix used while a download is in flight.
pub const TEMP_SUFFIX: &str = ".temp";

/// Joins `dir_path` and `file_name` with the platform separator.
/// Pure; no existence check, no normalization.
pub fn final_path(dir_path: &str, file_name: &str) -> PathBuf {
    PathBuf::from(format!("{dir_path}{MAIN_SEPARATOR}{file_name}"))
}

/// Path for the in-flight file: `final_path` plus `.temp`
/// (e.g. `firmware.bin` → `firmware.bin.temp`).
pub fn temp_path(dir_path: &str, file_name: &str) -> PathBuf {
    let mut o = final_path(dir_path, file_name).into_os_string();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

//! Task identity and atomic finalization for FDL downloads.
//!
//! This crate is the filesystem-facing core of the download manager: it
//! derives stable per-task identifiers, builds final/temp paths, and
//! promotes completed temp files to their destinations. Transfer and
//! persistence belong to the caller.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod commit;
pub mod filename;
pub mod identity;
pub mod paths;
pub mod target;

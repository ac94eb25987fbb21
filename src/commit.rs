//! Atomic promotion of a completed temp file to its final path.
//!
//! `commit` is delete-then-rename, with an RAII guard that removes the temp
//! file on every exit path. The two filesystem steps are not atomic as a
//! pair, so callers must serialize commits per destination; the crate takes
//! no locks.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure during finalization. Either way the temp file is gone afterwards;
/// the caller must restart the download from scratch rather than resume.
#[derive(Debug, Error)]
pub enum CommitError {
    /// An existing file at the destination could not be removed. The rename
    /// is not attempted: renaming over an unremovable file risks diverging
    /// platform semantics.
    #[error("deletion failed: {}: {}", .path.display(), .source)]
    Deletion { path: PathBuf, source: io::Error },
    /// The temp file could not be moved to the destination.
    #[error("rename failed: {} -> {}: {}", .from.display(), .to.display(), .source)]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Removes the temp file when dropped, if it still exists. The outcome is
/// ignored: a leftover temp file costs disk space, not correctness.
struct TempCleanup<'a> {
    temp_path: &'a Path,
}

impl Drop for TempCleanup<'_> {
    fn drop(&mut self) {
        if self.temp_path.exists() && std::fs::remove_file(self.temp_path).is_ok() {
            tracing::debug!("removed leftover temp file {}", self.temp_path.display());
        }
    }
}

/// Makes `final_path` contain exactly the bytes at `temp_path` and removes
/// `temp_path`, on success and failure alike.
///
/// An existing destination is deleted first, then the temp file is renamed
/// into place. On failure the destination is either absent or untouched;
/// the temp file is removed regardless, so a failed commit means the
/// download must be redone, not resumed.
pub fn commit(temp_path: &Path, final_path: &Path) -> Result<(), CommitError> {
    let _cleanup = TempCleanup { temp_path };

    if final_path.exists() {
        std::fs::remove_file(final_path).map_err(|source| CommitError::Deletion {
            path: final_path.to_path_buf(),
            source,
        })?;
    }

    std::fs::rename(temp_path, final_path).map_err(|source| CommitError::Rename {
        from: temp_path.to_path_buf(),
        to: final_path.to_path_buf(),
        source,
    })?;

    tracing::debug!("committed {}", final_path.display());
    Ok(())
}

/// Best-effort removal of an abandoned temp file (cancelled download).
pub fn discard_temp(temp_path: &Path) {
    if temp_path.exists() {
        match std::fs::remove_file(temp_path) {
            Ok(()) => tracing::debug!("discarded temp file {}", temp_path.display()),
            Err(err) => tracing::debug!(
                "could not discard temp file {}: {}",
                temp_path.display(),
                err
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn commit_moves_temp_to_final() {
        let dir = tempfile::tempdir().unwrap();
        let tp = dir.path().join("out.bin.temp");
        let fp = dir.path().join("out.bin");
        fs::write(&tp, b"content").unwrap();

        commit(&tp, &fp).unwrap();

        assert!(!tp.exists());
        assert_eq!(fs::read(&fp).unwrap(), b"content");
    }

    #[test]
    fn commit_replaces_existing_final() {
        let dir = tempfile::tempdir().unwrap();
        let tp = dir.path().join("out.bin.temp");
        let fp = dir.path().join("out.bin");
        fs::write(&tp, b"new").unwrap();
        fs::write(&fp, b"old-and-longer").unwrap();

        commit(&tp, &fp).unwrap();

        assert!(!tp.exists());
        assert_eq!(fs::read(&fp).unwrap(), b"new");
    }

    #[test]
    fn undeletable_final_fails_and_temp_is_cleaned() {
        let dir = tempfile::tempdir().unwrap();
        let tp = dir.path().join("out.bin.temp");
        // A directory at the destination cannot be removed with remove_file,
        // even when the tests run as root.
        let fp = dir.path().join("out.bin");
        fs::create_dir(&fp).unwrap();
        fs::write(fp.join("keep"), b"D").unwrap();
        fs::write(&tp, b"C").unwrap();

        let err = commit(&tp, &fp).unwrap_err();
        assert!(matches!(err, CommitError::Deletion { .. }));
        assert!(err.to_string().starts_with("deletion failed"));

        // Cleanup still ran; the destination kept its original content.
        assert!(!tp.exists());
        assert_eq!(fs::read(fp.join("keep")).unwrap(), b"D");
    }

    #[test]
    fn missing_temp_fails_rename() {
        let dir = tempfile::tempdir().unwrap();
        let tp = dir.path().join("gone.temp");
        let fp = dir.path().join("gone.bin");

        let err = commit(&tp, &fp).unwrap_err();
        assert!(matches!(err, CommitError::Rename { .. }));
        assert!(err.to_string().starts_with("rename failed"));
        assert!(!fp.exists());
    }

    #[test]
    fn discard_temp_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let tp = dir.path().join("cancelled.temp");
        fs::write(&tp, b"partial").unwrap();

        discard_temp(&tp);
        assert!(!tp.exists());

        // Second call is a no-op.
        discard_temp(&tp);
    }
}

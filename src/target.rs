//! The identity triple for a single download.

use std::path::PathBuf;

use crate::identity::{self, TaskId};
use crate::paths;

/// Immutable identity of a download task.
///
/// Two targets with equal fields are the same task everywhere in the
/// system: the derived id, both paths, and any externally persisted state
/// key off these three strings and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DownloadTarget {
    pub url: String,
    pub dir_path: String,
    pub file_name: String,
}

impl DownloadTarget {
    pub fn new(
        url: impl Into<String>,
        dir_path: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            dir_path: dir_path.into(),
            file_name: file_name.into(),
        }
    }

    /// Destination path for the completed download.
    pub fn final_path(&self) -> PathBuf {
        paths::final_path(&self.dir_path, &self.file_name)
    }

    /// In-flight path the downloader writes to before commit.
    pub fn temp_path(&self) -> PathBuf {
        paths::temp_path(&self.dir_path, &self.file_name)
    }

    /// Stable identifier for this target.
    pub fn task_id(&self) -> TaskId {
        identity::task_id(&self.url, &self.dir_path, &self.file_name)
    }
}

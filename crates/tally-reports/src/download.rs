//! Writing downloaded report archives to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name the exported archive is stored under.
pub const ARCHIVE_NAME: &str = "reports.zip";

/// Outcome of the archive download flow.
///
/// The download operation never propagates errors; every failure branch
/// collapses into [`DownloadStatus::Failed`] with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    /// The archive was written to disk.
    Downloaded {
        /// Where the archive ended up.
        path: PathBuf,
    },
    /// The download did not complete.
    Failed {
        /// Failure description; the backend message when one was given.
        message: String,
    },
}

impl DownloadStatus {
    /// Returns true if the archive was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }

    /// The failure message, if the download failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Downloaded { .. } => None,
            Self::Failed { message } => Some(message),
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Writes the archive bytes under `directory` and returns the path.
pub(crate) fn save_archive(directory: &Path, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = directory.join(ARCHIVE_NAME);
    fs::write(&path, bytes)?;
    Ok(path)
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a placement run
///
/// None of these are recovered from; the library is left as-is and the run
/// can be repeated once the cause is fixed.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Destination directory does not exist: {path}")]
    MissingDestinationRoot { path: PathBuf },

    #[error("Source file does not exist: {path}")]
    MissingSourceFile { path: PathBuf },

    /// A catalog file path with no file name, such as `..`
    #[error("Source path has no file name: {path}")]
    InvalidSourcePath { path: PathBuf },

    #[error("Failed to create directory {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlacementError {
    /// Whether the run failed on a filesystem operation rather than a missing input
    pub fn is_filesystem_failure(&self) -> bool {
        matches!(self, Self::CreateDirectory { .. } | Self::CopyFile { .. })
    }
}

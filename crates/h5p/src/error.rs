use std::path::PathBuf;

use h5quiz_core::ControlError;
use thiserror::Error;

/// Errors that can occur while rendering or packaging H5P content.
#[derive(Debug, Error)]
pub enum H5pError {
    /// The control file holds an unusable value.
    #[error(transparent)]
    Control(#[from] ControlError),
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error while reading libraries or writing the archive.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The zip writer rejected an entry.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Walking the library directory failed.
    #[error("Library directory error: {0}")]
    Walk(#[from] walkdir::Error),
    /// The H5P library directory does not exist.
    #[error("H5P library directory not found: {}", .0.display())]
    MissingLibraries(PathBuf),
}

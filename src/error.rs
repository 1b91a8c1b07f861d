use std::path::PathBuf;

use thiserror::Error;

/// Errors produced when mapping a caller-supplied name into the storage root
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Name is empty or normalizes to the storage root itself
    #[error("File name is empty")]
    Empty,

    /// Name would resolve outside the storage root
    #[error("File name escapes the storage root: {0}")]
    Traversal(String),
}

/// Errors that can occur while storing an uploaded file
#[derive(Debug, Error)]
pub enum UploadError {
    /// Presented credential does not match the configured secret
    #[error("Unauthorized")]
    Unauthorized,

    /// File name was rejected by the path resolver
    #[error("Invalid file name: {0}")]
    InvalidName(#[from] PathError),

    /// Writing to the storage root failed
    #[error("Failed to write {}: {source}", path.display())]
    StorageFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while reading a stored file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// File name was rejected by the path resolver
    #[error("Invalid file name: {0}")]
    InvalidName(#[from] PathError),

    /// File is missing or could not be read
    #[error("File not found: {0}")]
    NotFound(String),
}

//! Upload and download operations.
//!
//! `FileService` ties together the [`AuthGate`] and the
//! [`StoragePathResolver`]:
//!
//! ```text
//! upload:   credential -> AuthGate -> resolve(name) -> write (create or overwrite)
//! download:                           resolve(name) -> read whole file
//! ```
//!
//! There is no locking. Concurrent uploads of the same name are last-write-wins,
//! and a download racing an upload may observe whatever the filesystem exposes
//! at that moment.

use std::fmt;
use std::path::PathBuf;

use bytes::Bytes;
use tracing::{debug, error, info, warn};

use super::resolver::StoragePathResolver;
use crate::error::{DownloadError, UploadError};
use crate::server::auth::AuthGate;

/// Where an upload ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLocation {
    /// Resolved path under the storage root
    pub path: PathBuf,

    /// Number of bytes written
    pub size: u64,
}

impl fmt::Display for StoredLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Upload/download core, independent of any transport.
#[derive(Debug, Clone)]
pub struct FileService {
    auth: AuthGate,
    resolver: StoragePathResolver,
}

impl FileService {
    /// Create a service from an auth gate and a path resolver.
    pub fn new(auth: AuthGate, resolver: StoragePathResolver) -> Self {
        Self { auth, resolver }
    }

    /// Whether `credential` would be accepted for an upload.
    pub fn is_authorized(&self, credential: Option<&str>) -> bool {
        self.auth.check_optional(credential)
    }

    /// Store `content` under `filename`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// - [`UploadError::Unauthorized`] if the credential is missing or wrong.
    ///   Nothing on disk is touched in that case.
    /// - [`UploadError::InvalidName`] if the name is empty or escapes the root.
    /// - [`UploadError::StorageFailure`] on any write error. The file may be
    ///   absent, partial or fully written afterwards.
    pub async fn upload(
        &self,
        credential: Option<&str>,
        filename: &str,
        content: &[u8],
    ) -> Result<StoredLocation, UploadError> {
        if !self.is_authorized(credential) {
            warn!(filename, "Upload rejected: invalid credential");
            return Err(UploadError::Unauthorized);
        }

        let path = self.resolver.resolve(filename).map_err(|e| {
            warn!(filename, "Upload rejected: {}", e);
            UploadError::InvalidName(e)
        })?;

        if let Err(source) = tokio::fs::write(&path, content).await {
            error!(path = %path.display(), "Upload failed: {}", source);
            return Err(UploadError::StorageFailure { path, source });
        }

        info!(path = %path.display(), size = content.len(), "File uploaded");

        Ok(StoredLocation {
            path,
            size: content.len() as u64,
        })
    }

    /// Read the full content stored under `filename`.
    ///
    /// Any read error (missing file, permissions, a directory at that path)
    /// is reported as [`DownloadError::NotFound`].
    pub async fn download(&self, filename: &str) -> Result<Bytes, DownloadError> {
        let path = self.resolver.resolve(filename).map_err(|e| {
            warn!(filename, "Download rejected: {}", e);
            DownloadError::InvalidName(e)
        })?;

        match tokio::fs::read(&path).await {
            Ok(data) => {
                debug!(path = %path.display(), size = data.len(), "File downloaded");
                Ok(Bytes::from(data))
            }
            Err(e) => {
                debug!(path = %path.display(), "Download failed: {}", e);
                Err(DownloadError::NotFound(filename.to_string()))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! HTTP request handlers for the file service.
//!
//! These handlers are a thin adapter: they pull the credential, file name and
//! bytes out of the request and delegate to [`FileService`].
//!
//! # Endpoints
//!
//! - `POST /files` - Upload a file (multipart field `file`, header `Celonis-Auth`)
//! - `GET /files/{filename}` - Download a file
//! - `GET /` - Welcome message
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error, warn};

use super::auth::credential_from_headers;
use crate::error::{DownloadError, UploadError};
use crate::storage::FileService;

/// Name of the multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Body returned by `GET /`.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the File Service Application! Use /files to upload or download files.";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upload/download core
    pub service: Arc<FileService>,
}

impl AppState {
    /// Create a new application state around the given service.
    pub fn new(service: FileService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert UploadError to a plain-text HTTP response.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            UploadError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            UploadError::InvalidName(_) => (StatusCode::BAD_REQUEST, "Invalid file name"),
            UploadError::StorageFailure { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "File upload failed")
            }
        };

        (status, body).into_response()
    }
}

/// Convert DownloadError to an HTTP response with an empty body.
impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        let status = match &self {
            DownloadError::InvalidName(_) => StatusCode::BAD_REQUEST,
            DownloadError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        status.into_response()
    }
}

/// Everything that can stop an upload request, including multipart problems
/// that happen before the core is reached.
#[derive(Debug)]
pub enum UploadRejection {
    /// Rejected by the upload core
    Upload(UploadError),

    /// The multipart body has no `file` field
    MissingFilePart,

    /// The request is not `multipart/form-data` or has no boundary
    NotMultipart(MultipartRejection),

    /// The multipart body could not be read (malformed, too large, ...)
    Multipart(MultipartError),
}

impl IntoResponse for UploadRejection {
    fn into_response(self) -> Response {
        match self {
            UploadRejection::Upload(err) => err.into_response(),
            UploadRejection::MissingFilePart => {
                warn!("Upload rejected: no '{}' part in request", FILE_FIELD);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Required part '{}' is not present.", FILE_FIELD),
                )
                    .into_response()
            }
            UploadRejection::NotMultipart(rejection) => {
                warn!(
                    status = rejection.status().as_u16(),
                    "Upload rejected: {}", rejection
                );
                rejection.into_response()
            }
            UploadRejection::Multipart(err) => {
                let status = err.status();
                if status.is_server_error() {
                    error!(status = status.as_u16(), "Multipart error: {}", err);
                } else {
                    warn!(status = status.as_u16(), "Multipart error: {}", err);
                }
                (status, err.body_text()).into_response()
            }
        }
    }
}

impl From<UploadError> for UploadRejection {
    fn from(err: UploadError) -> Self {
        UploadRejection::Upload(err)
    }
}

impl From<MultipartRejection> for UploadRejection {
    fn from(rejection: MultipartRejection) -> Self {
        UploadRejection::NotMultipart(rejection)
    }
}

impl From<MultipartError> for UploadRejection {
    fn from(err: MultipartError) -> Self {
        UploadRejection::Multipart(err)
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle file uploads.
///
/// # Endpoint
///
/// `POST /files`
///
/// # Request
///
/// - Header `Celonis-Auth: <secret>`
/// - `multipart/form-data` body with a `file` field; its filename names the stored file
///
/// # Response
///
/// - `200 OK`: `File uploaded successfully: <path>`
/// - `400 Bad Request`: Invalid file name, missing `file` part or non-multipart body
/// - `401 Unauthorized`: `Unauthorized`, whatever the body looks like
/// - `500 Internal Server Error`: `File upload failed`
pub async fn upload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, UploadRejection> {
    let credential = credential_from_headers(&headers);

    // Credential is checked before the body is parsed
    if !state.service.is_authorized(credential) {
        return Err(UploadError::Unauthorized.into());
    }

    let mut multipart = multipart?;
    let (filename, content) = read_file_part(&mut multipart).await?;

    let location = state
        .service
        .upload(credential, &filename, &content)
        .await?;
    debug!(path = %location, size = location.size, "Upload stored");

    Ok((
        StatusCode::OK,
        format!("File uploaded successfully: {}", location),
    )
        .into_response())
}

/// Find the `file` field and buffer it. Other fields are skipped.
async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes), UploadRejection> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        return Ok((filename, content));
    }

    Err(UploadRejection::MissingFilePart)
}

/// Handle file downloads.
///
/// # Endpoint
///
/// `GET /files/{filename}`
///
/// # Response
///
/// - `200 OK`: raw file bytes with `Content-Type: application/octet-stream`
/// - `400 Bad Request`: file name escapes the storage root (empty body)
/// - `404 Not Found`: file missing or unreadable (empty body)
pub async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, DownloadError> {
    let data = state.service.download(&filename).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        data,
    )
        .into_response())
}

/// Handle requests to the root path.
pub async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

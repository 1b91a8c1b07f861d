//! # File Service
//!
//! A minimal network-facing file store: upload a file over HTTP, persist it
//! under a local directory, and serve it back by name.
//!
//! ## Features
//!
//! - **Shared-secret uploads**: `POST /files` requires the `Celonis-Auth` header
//! - **Public downloads**: `GET /files/{filename}` returns the raw bytes
//! - **Path safety**: names that would escape the storage root are rejected
//! - **Overwrite semantics**: re-uploading a name replaces the previous content
//!
//! ## Architecture
//!
//! - [`storage`] - Path resolution and the transport-agnostic upload/download core
//! - [`server`] - Axum-based HTTP adapter, auth gate and routes
//! - [`config`] - CLI and environment configuration
//! - [`error`] - Error types shared by the core and the adapter
//!
//! ## Example
//!
//! ```rust,no_run
//! use file_service::{create_router, AuthGate, FileService, RouterConfig, StoragePathResolver};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let resolver = StoragePathResolver::new("/data");
//!     resolver.ensure_base()?;
//!
//!     let service = FileService::new(AuthGate::new("s3cr3t"), resolver);
//!     let router = create_router(service, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, router).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{DownloadError, PathError, UploadError};
pub use server::{
    create_router, download_handler, health_handler, home_handler, upload_handler, AppState,
    AuthGate, HealthResponse, RouterConfig, UploadRejection, AUTH_HEADER, WELCOME_MESSAGE,
};
pub use storage::{resolve, FileService, StoragePathResolver, StoredLocation};

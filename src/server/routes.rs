//! Router configuration for the file service.
//!
//! # Route Structure
//!
//! ```text
//! /                   - Welcome message (public)
//! /health             - Health check (public)
//! POST /files         - Upload (requires Celonis-Auth)
//! GET /files/{name}   - Download (public)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use file_service::server::routes::{create_router, RouterConfig};
//! use file_service::server::auth::AuthGate;
//! use file_service::storage::{FileService, StoragePathResolver};
//!
//! let service = FileService::new(AuthGate::new("s3cr3t"), StoragePathResolver::new("/data"));
//! let router = create_router(service, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::AUTH_HEADER;
use super::handlers::{download_handler, health_handler, home_handler, upload_handler, AppState};
use crate::storage::FileService;

/// Default cap on upload request bodies (10 MiB).
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Maximum accepted request body size in bytes
    pub max_upload_size: usize,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with defaults:
    /// - CORS allows any origin
    /// - 10 MiB upload limit
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Set the maximum request body size for uploads.
    pub fn with_max_upload_size(mut self, bytes: usize) -> Self {
        self.max_upload_size = bytes;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Upload authentication happens inside the upload handler so that a bad
/// credential is answered with the plain-text `Unauthorized` body.
pub fn create_router(service: FileService, config: RouterConfig) -> Router {
    let app_state = AppState::new(service);
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/files", post(upload_handler))
        .route("/files/{filename}", get(download_handler))
        .layer(DefaultBodyLimit::max(config.max_upload_size))
        .with_state(app_state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTH_HEADER])
        .max_age(Duration::from_secs(86400));

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! HTTP server layer for the file service.
//!
//! ```text
//! request ──► handlers ──► auth (upload only) ──► storage::FileService ──► disk
//!                │
//!                └── routes: router, CORS, body limit, tracing
//! ```

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::{credential_from_headers, AuthGate, AUTH_HEADER};
pub use handlers::{
    download_handler, health_handler, home_handler, upload_handler, AppState, HealthResponse,
    UploadRejection, FILE_FIELD, WELCOME_MESSAGE,
};
pub use routes::{create_router, RouterConfig, DEFAULT_MAX_UPLOAD_SIZE};

//! Shared-secret authentication for uploads.
//!
//! Uploads must carry the configured secret verbatim in the `Celonis-Auth`
//! header. There is no per-user identity: a request either presents the
//! secret or it does not.
//!
//! ```text
//! POST /files
//! Celonis-Auth: s3cr3t
//! ```
//!
//! Downloads are not gated.
//!
//! # Example
//!
//! ```rust
//! use file_service::server::auth::AuthGate;
//!
//! let gate = AuthGate::new("s3cr3t");
//! assert!(gate.check("s3cr3t"));
//! assert!(!gate.check("S3CR3T"));
//! ```

use axum::http::{HeaderMap, HeaderName};
use subtle::ConstantTimeEq;

/// Name of the request header carrying the shared secret.
pub const AUTH_HEADER: HeaderName = HeaderName::from_static("celonis-auth");

/// Accept/reject gate comparing a presented credential with the shared secret.
#[derive(Clone)]
pub struct AuthGate {
    secret: Vec<u8>,
}

impl AuthGate {
    /// Create a gate for the given secret.
    ///
    /// An empty secret is not a usable credential: a gate built from one
    /// rejects every presented value, including the empty string.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Returns `true` iff `presented` is byte-for-byte equal to the secret.
    ///
    /// The comparison runs in constant time for inputs of equal length.
    pub fn check(&self, presented: impl AsRef<[u8]>) -> bool {
        if self.secret.is_empty() {
            return false;
        }
        presented.as_ref().ct_eq(&self.secret).into()
    }

    /// Check an optional credential. A missing credential never matches.
    pub fn check_optional(&self, presented: Option<&str>) -> bool {
        presented.is_some_and(|credential| self.check(credential))
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Pull the credential out of the request headers.
///
/// Returns `None` when the header is absent or not valid UTF-8.
pub fn credential_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTH_HEADER)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

// =============================================================================
// Tests
// =============================================================================

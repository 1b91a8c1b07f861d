//! Configuration management for the file service.
//!
//! Options come from command-line arguments via clap, with every option also
//! readable from an environment variable with the `FILE_SERVICE_` prefix:
//!
//! - `FILE_SERVICE_HOST` - Server bind address (default: 0.0.0.0)
//! - `FILE_SERVICE_PORT` - Server port (default: 8080)
//! - `FILE_SERVICE_API_KEY` - Shared secret expected in `Celonis-Auth` (required)
//! - `FILE_SERVICE_STORAGE_PATH` - Storage root directory (default: uploads)
//! - `FILE_SERVICE_MAX_UPLOAD_SIZE` - Upload body limit in bytes (default: 10 MiB)
//! - `FILE_SERVICE_CORS_ORIGINS` - Allowed CORS origins, comma-separated
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use file_service::config::Config;
//!
//! let config = Config::parse();
//! config.validate()?;
//! println!("Serving {} on {}", config.storage_path.display(), config.bind_address());
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::server::DEFAULT_MAX_UPLOAD_SIZE;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default storage root, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "uploads";

// =============================================================================
// CLI Arguments
// =============================================================================

/// File Service - upload files with a shared secret, download them by name.
#[derive(Parser, Debug, Clone)]
#[command(name = "file-service")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "FILE_SERVICE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "FILE_SERVICE_PORT")]
    pub port: u16,

    // =========================================================================
    // Authentication Configuration
    // =========================================================================
    /// Shared secret that uploads must present in the `Celonis-Auth` header.
    #[arg(long, env = "FILE_SERVICE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    // =========================================================================
    // Storage Configuration
    // =========================================================================
    /// Directory where uploaded files are stored. Created at startup if missing.
    #[arg(long, default_value = DEFAULT_STORAGE_PATH, env = "FILE_SERVICE_STORAGE_PATH")]
    pub storage_path: PathBuf,

    /// Maximum upload request size in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_SIZE, env = "FILE_SERVICE_MAX_UPLOAD_SIZE")]
    pub max_upload_size: usize,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "FILE_SERVICE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err(
                "API key must not be empty. Set --api-key or FILE_SERVICE_API_KEY".to_string(),
            );
        }

        if self.storage_path.as_os_str().is_empty() {
            return Err(
                "Storage path must not be empty. Set --storage-path or FILE_SERVICE_STORAGE_PATH"
                    .to_string(),
            );
        }

        if self.max_upload_size == 0 {
            return Err("max_upload_size must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================

//! File Service - upload and download files over HTTP.
//!
//! This binary reads configuration, prepares the storage root and starts the
//! HTTP server.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use file_service::{
    config::Config,
    server::{auth::AuthGate, create_router, RouterConfig},
    storage::{FileService, StoragePathResolver},
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("File Service v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Storage path: {}", config.storage_path.display());
    info!("  Max upload size: {} bytes", config.max_upload_size);
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }
    warn!("  Downloads are not authenticated; anyone who can reach the server can read stored files");

    // Storage root must exist before serving traffic
    let resolver = StoragePathResolver::new(&config.storage_path);
    if let Err(e) = resolver.ensure_base() {
        error!(
            "Failed to create storage directory {}: {}",
            config.storage_path.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    let service = FileService::new(AuthGate::new(&config.api_key), resolver);
    let router = create_router(service, build_router_config(&config));

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server listening on: http://{}", addr);
    info!("  curl -H 'Celonis-Auth: <key>' -F file=@report.txt http://{}/files", addr);
    info!("  curl http://{}/files/report.txt", addr);

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "file_service=debug,tower_http=debug"
    } else {
        "file_service=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::new()
        .with_max_upload_size(config.max_upload_size)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

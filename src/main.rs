//! File Browser - browse a local directory tree over HTTP.
//!
//! This binary parses configuration, opens the base directory and starts the
//! HTTP server.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use file_browser::{
    browse::BaseDir,
    config::Config,
    server::{create_router, RouterConfig, FILES_ROUTE, STATIC_ROUTE},
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let base_dir = match BaseDir::new(&config.base_dir) {
        Ok(base_dir) => base_dir,
        Err(e) => {
            error!("Cannot open base directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("File Browser v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Base directory: {}", base_dir.root().display());
    if !config.link_prefix.is_empty() {
        info!("  Link prefix: {}", config.link_prefix);
    }
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    let router = create_router(base_dir, build_router_config(&config));

    let addr = config.bind_address();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server listening on: http://{}", addr);
    info!("  Browse:  http://{}{}/", addr, FILES_ROUTE);
    info!("  Static:  http://{}{}/<path>", addr, STATIC_ROUTE);

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "file_browser=debug,tower_http=debug"
    } else {
        "file_browser=info,tower_http=info"
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
        .with_link_prefix(config.link_prefix.clone())
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

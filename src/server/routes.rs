//! Router configuration for the file browser.
//!
//! # Route Structure
//!
//! ```text
//! /health              - Health check
//! /files[/{*subpath}]  - Directory listing page or file download
//! /wfiles/{*subpath}   - Plain static file serving of the same tree
//! ```
//!
//! # Example
//!
//! ```ignore
//! use file_browser::browse::BaseDir;
//! use file_browser::server::routes::{create_router, RouterConfig};
//!
//! let base_dir = BaseDir::new("/data")?;
//! let router = create_router(base_dir, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{files_handler, files_root_handler, health_handler, AppState};
use crate::browse::BaseDir;

/// Route prefix of the custom listing/download handler.
pub const FILES_ROUTE: &str = "/files";

/// Route prefix of the generic static file service.
pub const STATIC_ROUTE: &str = "/wfiles";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Prefix prepended to links in listing pages
    pub link_prefix: String,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterConfig {
    /// Create a new router configuration.
    ///
    /// By default:
    /// - Listing links carry no prefix
    /// - CORS allows any origin
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            link_prefix: String::new(),
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set the prefix prepended to listing links.
    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// `/files` resolves requests through [`BaseDir`] with listing pages and
/// attachment downloads. `/wfiles` hands the same tree to tower-http's
/// [`ServeDir`] and inherits its behavior, including for directories.
pub fn create_router(base_dir: BaseDir, config: RouterConfig) -> Router {
    let static_files = ServeDir::new(base_dir.root());
    let app_state = AppState::new(base_dir).with_link_prefix(&config.link_prefix);

    let cors = build_cors_layer(&config);

    // `{*subpath}` never matches an empty tail, so the root needs its own routes
    let router = Router::new()
        .route("/health", get(health_handler))
        .route(FILES_ROUTE, get(files_root_handler))
        .route(&format!("{}/", FILES_ROUTE), get(files_root_handler))
        .route(&format!("{}/{{*subpath}}", FILES_ROUTE), get(files_handler))
        .with_state(app_state)
        .nest_service(STATIC_ROUTE, static_files)
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
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
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

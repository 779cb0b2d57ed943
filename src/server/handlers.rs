//! HTTP request handlers for the file browser.
//!
//! # Endpoints
//!
//! - `GET /files/{*subpath}` - Directory listing page or file download
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::browse::{list_directory, render_listing, BaseDir, EntryKind};
use crate::error::BrowseError;

use super::files::file_response;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// This is passed to all handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The directory exposed under `/files`
    pub base_dir: Arc<BaseDir>,

    /// Prefix prepended to links in listing pages
    pub link_prefix: Arc<str>,
}

impl AppState {
    /// Create a new application state with unprefixed listing links.
    pub fn new(base_dir: BaseDir) -> Self {
        Self {
            base_dir: Arc::new(base_dir),
            link_prefix: Arc::from(""),
        }
    }

    /// Set the prefix prepended to listing links.
    pub fn with_link_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.link_prefix = Arc::from(prefix.as_ref());
        self
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "not_found", "forbidden")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

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

/// Convert BrowseError to HTTP response.
///
/// - 5xx errors are logged at ERROR level
/// - 404s at DEBUG level (common and expected)
/// - other 4xx at WARN level
impl IntoResponse for BrowseError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            BrowseError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            BrowseError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            BrowseError::NotADirectory(_) | BrowseError::Io { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "io_error")
            }
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);

        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle requests for the root of the base directory.
///
/// # Endpoint
///
/// `GET /files` and `GET /files/`
pub async fn files_root_handler(State(state): State<AppState>) -> Result<Response, BrowseError> {
    browse(&state, String::new()).await
}

/// Handle requests below the root of the base directory.
///
/// # Endpoint
///
/// `GET /files/{*subpath}`
///
/// # Response
///
/// - `200 OK`: HTML listing (`text/html`) for directories, attachment
///   download for regular files
/// - `403 Forbidden`: Sub-path escapes the base directory
/// - `404 Not Found`: Nothing at the sub-path
/// - `500 Internal Server Error`: Listing or read failure
pub async fn files_handler(
    State(state): State<AppState>,
    Path(subpath): Path<String>,
) -> Result<Response, BrowseError> {
    browse(&state, format!("/{}", subpath)).await
}

/// Resolve `subpath` and dispatch to the listing or the file response.
async fn browse(state: &AppState, subpath: String) -> Result<Response, BrowseError> {
    info!(subpath = %subpath, "Files request");

    let resolved = state.base_dir.resolve(&subpath).await?;

    match resolved.kind {
        EntryKind::Directory => {
            let link_prefix = Arc::clone(&state.link_prefix);
            let page = tokio::task::spawn_blocking(move || {
                let listing = list_directory(&resolved.path)?;
                debug!(
                    directories = listing.directories.len(),
                    files = listing.files.len(),
                    "Rendering listing"
                );
                Ok::<_, BrowseError>(render_listing(&listing, &subpath, &link_prefix))
            })
            .await
            .map_err(|e| BrowseError::Io {
                path: String::new(),
                message: e.to_string(),
            })??;

            Ok(Html(page).into_response())
        }
        EntryKind::File => file_response(&resolved.path, &resolved.name).await,
    }
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

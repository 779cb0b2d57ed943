//! # File Browser
//!
//! A minimal HTTP file browser for a single local directory tree.
//!
//! Requests under `/files` are resolved against the configured base
//! directory. Directories are rendered as an HTML page of links
//! (subdirectories first, then files, each group sorted), and regular files
//! are streamed back as downloadable attachments with a content type guessed
//! from the file name. `/wfiles` serves the same tree as plain static files.
//!
//! ## Architecture
//!
//! - [`browse`] - Path resolution, directory listing and page rendering
//! - [`server`] - Axum-based HTTP handlers and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error type shared by both layers
//!
//! ## Example
//!
//! ```rust,no_run
//! use file_browser::{create_router, BaseDir, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let base_dir = BaseDir::new("/data")?;
//!     let router = create_router(base_dir, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod browse;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use browse::{
    entry_href, html_escape, list_directory, render_listing, render_template, BaseDir,
    DirectoryListing, EntryKind, ResolvedPath,
};
pub use config::Config;
pub use error::BrowseError;
pub use server::{
    content_disposition, create_router, file_response, AppState, ErrorResponse, HealthResponse,
    RouterConfig, FILES_ROUTE, STATIC_ROUTE,
};

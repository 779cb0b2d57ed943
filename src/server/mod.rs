//! HTTP server layer for the file browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /files/{*subpath}        GET /wfiles/{*subpath}      │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │    files    │  │        routes           │  │
//! │  │ (dispatch)  │  │ (download)  │  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod files;
pub mod handlers;
pub mod routes;

pub use files::{content_disposition, file_response};
pub use handlers::{
    files_handler, files_root_handler, health_handler, AppState, ErrorResponse, HealthResponse,
};
pub use routes::{create_router, RouterConfig, FILES_ROUTE, STATIC_ROUTE};

//! Configuration management for the file browser.
//!
//! Configuration comes from command-line arguments via clap, with
//! environment variable fallbacks using the `FILE_BROWSER_` prefix:
//!
//! - `FILE_BROWSER_HOST` - Server bind address (default: 0.0.0.0)
//! - `FILE_BROWSER_PORT` - Server port (default: 3000)
//! - `FILE_BROWSER_BASE_DIR` - Directory to expose (required)
//! - `FILE_BROWSER_LINK_PREFIX` - Prefix prepended to listing links (default: empty)
//! - `FILE_BROWSER_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)
//!
//! The base directory is fixed for the lifetime of the process.

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// File Browser - browse a local directory tree over HTTP.
///
/// Directories under /files are rendered as HTML link listings, files are
/// served as downloads. The same tree is also served as plain static files
/// under /wfiles.
#[derive(Parser, Debug, Clone)]
#[command(name = "file-browser")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "FILE_BROWSER_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "FILE_BROWSER_PORT")]
    pub port: u16,

    // =========================================================================
    // Browsing Configuration
    // =========================================================================
    /// Directory whose contents are exposed.
    #[arg(short, long, env = "FILE_BROWSER_BASE_DIR")]
    pub base_dir: PathBuf,

    /// Prefix prepended to every link in a directory listing.
    ///
    /// Links are sub-paths relative to the /files route by default
    /// (e.g. "/docs/notes.txt"). Set to "/files" to emit absolute links.
    #[arg(long, default_value = "", env = "FILE_BROWSER_LINK_PREFIX")]
    pub link_prefix: String,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "FILE_BROWSER_CORS_ORIGINS", value_delimiter = ',')]
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
    ///
    /// Existence of the base directory is checked later, when it is opened.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(
                "Base directory is required. Set --base-dir or FILE_BROWSER_BASE_DIR".to_string(),
            );
        }

        if !self.link_prefix.is_empty() {
            if !self.link_prefix.starts_with('/') {
                return Err("link_prefix must start with '/'".to_string());
            }
            if self.link_prefix.ends_with('/') {
                return Err("link_prefix must not end with '/'".to_string());
            }
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

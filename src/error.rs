use std::io;

use thiserror::Error;

/// Errors that can occur while resolving, listing or serving a path
#[derive(Debug, Clone, Error)]
pub enum BrowseError {
    /// Path does not exist under the base directory, or is neither a
    /// directory nor a regular file
    #[error("Not found: {0}")]
    NotFound(String),

    /// Sub-path would escape the base directory (via `..` or a symlink)
    #[error("Path escapes base directory: {0}")]
    Forbidden(String),

    /// Configured base directory is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Listing or read failure (permissions, disappearance, device fault)
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl BrowseError {
    /// Classify an I/O error raised while touching `path`.
    ///
    /// `NotFound` (and `NotADirectory`, raised when a file is addressed with a
    /// trailing slash) become [`BrowseError::NotFound`]; everything else is
    /// reported as [`BrowseError::Io`].
    pub fn from_io(path: impl Into<String>, err: &io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => BrowseError::NotFound(path),
            _ => BrowseError::Io {
                path,
                message: err.to_string(),
            },
        }
    }
}

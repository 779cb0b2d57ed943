//! One-level directory listings.

use std::fs;
use std::path::Path;

use crate::error::BrowseError;

/// Entries of a single directory, split by type and sorted.
///
/// Both groups are sorted by the byte order of the UTF-8 name, so upper case
/// sorts before lower case (`A.txt`, `B.txt`, `a.txt`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Subdirectory names (without trailing slash)
    pub directories: Vec<String>,

    /// Names of everything that is not a directory
    pub files: Vec<String>,
}

impl DirectoryListing {
    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// List the immediate entries of `path`.
///
/// Classification follows symlinks: a link to a directory is a directory.
/// Entries whose target cannot be inspected (dangling links) are listed as
/// files. Names that are not valid UTF-8 are converted lossily.
///
/// Blocking; call from `spawn_blocking` in async contexts. Any failure to
/// open or iterate the directory fails the whole listing.
pub fn list_directory(path: &Path) -> Result<DirectoryListing, BrowseError> {
    let display = path.display().to_string();
    let io_err = |e: std::io::Error| BrowseError::Io {
        path: display.clone(),
        message: e.to_string(),
    };

    let mut listing = DirectoryListing::default();

    for entry in fs::read_dir(path).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        let is_dir = fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if is_dir {
            listing.directories.push(name);
        } else {
            listing.files.push(name);
        }
    }

    listing.directories.sort();
    listing.files.sort();

    Ok(listing)
}

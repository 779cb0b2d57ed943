//! Mapping request sub-paths onto the base directory.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::BrowseError;

/// What a resolved path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A location inside the base directory, canonicalized and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Canonical absolute path, guaranteed to be inside the base directory
    pub path: PathBuf,

    /// Whether the path is a directory or a regular file
    pub kind: EntryKind,

    /// Name of the entry as requested, before symlinks are followed
    pub name: String,
}

/// The single filesystem root exposed by the server.
///
/// The root is canonicalized once at construction. Every sub-path is then
/// resolved relative to it and must stay inside it after symlinks are
/// followed.
#[derive(Debug, Clone)]
pub struct BaseDir {
    root: PathBuf,
}

impl BaseDir {
    /// Open the base directory.
    ///
    /// Fails if the path does not exist or is not a directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, BrowseError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let root = path
            .canonicalize()
            .map_err(|e| BrowseError::from_io(display.clone(), &e))?;

        if !root.is_dir() {
            return Err(BrowseError::NotADirectory(display));
        }

        Ok(Self { root })
    }

    /// Canonical path of the base directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request sub-path (e.g. `/docs/notes.txt`, possibly empty).
    ///
    /// # Errors
    ///
    /// - [`BrowseError::Forbidden`] if the sub-path contains `..` or a NUL
    ///   byte, or if it leaves the base directory through a symlink
    /// - [`BrowseError::NotFound`] if nothing exists there, the entry is
    ///   neither a directory nor a regular file, or a file is addressed with
    ///   a trailing slash
    /// - [`BrowseError::Io`] for any other filesystem failure
    pub async fn resolve(&self, subpath: &str) -> Result<ResolvedPath, BrowseError> {
        let joined = join_lexically(&self.root, subpath)?;

        let canonical = tokio::fs::canonicalize(&joined)
            .await
            .map_err(|e| BrowseError::from_io(subpath, &e))?;

        if !canonical.starts_with(&self.root) {
            warn!(
                subpath = subpath,
                resolved = %canonical.display(),
                "Sub-path resolved outside base directory"
            );
            return Err(BrowseError::Forbidden(subpath.to_string()));
        }

        let metadata = tokio::fs::metadata(&canonical)
            .await
            .map_err(|e| BrowseError::from_io(subpath, &e))?;

        // A trailing slash only ever names a directory
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() && !subpath.ends_with('/') {
            EntryKind::File
        } else {
            return Err(BrowseError::NotFound(subpath.to_string()));
        };

        let name = Path::new(subpath.trim_start_matches('/'))
            .file_name()
            .or_else(|| canonical.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(ResolvedPath {
            path: canonical,
            kind,
            name,
        })
    }
}

/// Join `subpath` onto `root` without touching the filesystem.
///
/// Leading slashes are stripped, `.` and empty segments are skipped. Parent
/// references, absolute components and NUL bytes are rejected.
fn join_lexically(root: &Path, subpath: &str) -> Result<PathBuf, BrowseError> {
    if subpath.contains('\0') {
        return Err(BrowseError::Forbidden(subpath.to_string()));
    }

    let mut joined = root.to_path_buf();
    for component in Path::new(subpath.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => joined.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(BrowseError::Forbidden(subpath.to_string()));
            }
        }
    }

    Ok(joined)
}

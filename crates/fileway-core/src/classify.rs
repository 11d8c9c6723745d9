//! Filesystem path classification.

use std::fs;
use std::io;
use std::path::Path;

use crate::Result;

/// What, if anything, occupies a filesystem path.
///
/// Exactly one of the three cases holds for any given path. A permission
/// failure or other I/O error while inspecting the path is reported through
/// the error channel, never folded into [`PathKind::Missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// A directory exists at the path.
    Directory,
    /// A regular file (or other non-directory entity) exists at the path.
    File,
}

impl PathKind {
    /// Returns `true` if a directory occupies the path.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` if a file occupies the path.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if anything occupies the path.
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Classifies the entity at `path`.
///
/// Symlinks are followed, so a link is classified by its target; a dangling
/// link classifies as [`PathKind::Missing`].
///
/// # Errors
///
/// Any I/O failure other than the path not existing (permission denied,
/// unreachable filesystem) is returned as an error.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::classify;
///
/// # fn main() -> fileway_core::Result<()> {
/// if classify("uploads")?.is_dir() {
///     println!("uploads directory is in place");
/// }
/// # Ok(())
/// # }
/// ```
pub fn classify<P: AsRef<Path>>(path: P) -> Result<PathKind> {
    match fs::metadata(path.as_ref()) {
        Ok(metadata) if metadata.is_dir() => Ok(PathKind::Directory),
        Ok(_) => Ok(PathKind::File),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(e) => Err(e.into()),
    }
}

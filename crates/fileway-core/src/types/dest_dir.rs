//! Validated destination directory type.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::Result;
use crate::classify::PathKind;
use crate::classify::classify;

/// A destination directory that exists and is held by its canonical path.
///
/// Entry paths are containment-checked against the canonical form, so a
/// symlinked destination cannot redirect writes elsewhere.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::DestDir;
///
/// # fn main() -> fileway_core::Result<()> {
/// let dest = DestDir::create("unpacked")?;
/// println!("extracting into {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates the directory at `path`, failing if anything already exists
    /// there.
    ///
    /// Extraction destinations are always created fresh; there is no
    /// implicit overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] when the path is occupied, or an I/O
    /// error when creation or canonicalization fails.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::create_dir(&path).map_err(|e| Error::from_io(e, &path))?;
        Self::canonicalized(path)
    }

    /// Opens the directory at `path`, creating it (with parents) if nothing
    /// exists there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] when a regular file occupies the
    /// path, or an I/O error when inspection, creation, or canonicalization
    /// fails.
    pub fn ensure(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match classify(&path)? {
            PathKind::Directory => {}
            PathKind::Missing => fs::create_dir_all(&path)?,
            PathKind::File => return Err(Error::AlreadyExists { path }),
        }
        Self::canonicalized(path)
    }

    fn canonicalized(path: PathBuf) -> Result<Self> {
        let canonical = path.canonicalize().map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("failed to canonicalize {}: {e}", path.display()),
            ))
        })?;
        Ok(Self(canonical))
    }

    /// Returns the canonical path of the directory.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a validated entry path onto this directory.
    #[inline]
    #[must_use]
    pub fn join(&self, entry: &super::EntryPath) -> PathBuf {
        self.0.join(entry.as_path())
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_fresh() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("fresh");

        let dest = DestDir::create(&target).unwrap();
        assert!(dest.as_path().is_absolute());
        assert!(target.is_dir());
    }

    #[test]
    fn test_create_rejects_existing_directory() {
        let temp = TempDir::new().unwrap();
        let result = DestDir::create(temp.path());
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    }

    #[test]
    fn test_create_rejects_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "data").unwrap();

        let result = DestDir::create(&file);
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    }

    #[test]
    fn test_create_fails_on_missing_parent() {
        let temp = TempDir::new().unwrap();
        let result = DestDir::create(temp.path().join("a/b/c"));
        assert!(result.is_err());
    }

    #[test]
    fn test_ensure_creates_missing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/uploads");

        let dest = DestDir::ensure(&target).unwrap();
        assert!(dest.as_path().is_absolute());
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_accepts_existing_directory() {
        let temp = TempDir::new().unwrap();
        let dest = DestDir::ensure(temp.path()).unwrap();
        assert_eq!(dest.as_path(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_ensure_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "data").unwrap();

        let result = DestDir::ensure(&file);
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_canonicalizes_through_symlinked_parent() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = temp.path().join("link");
        symlink(&real, &link).unwrap();

        let dest = DestDir::create(link.join("out")).unwrap();
        assert!(dest.as_path().starts_with(real.canonicalize().unwrap()));
    }
}

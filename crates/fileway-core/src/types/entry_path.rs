//! Validated relative entry path type.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::Result;

use super::DestDir;

/// A relative path validated to stay inside a [`DestDir`].
///
/// Archive entries and uploaded file names both pass through this type
/// before anything touches the filesystem. It can only be constructed by
/// [`EntryPath::validate`]; there is deliberately no `From<PathBuf>`.
///
/// Validation rejects empty names, absolute names, and any `..` component;
/// `.` components are normalized away; finally the name joined onto the
/// (canonical) destination must keep the destination as a strict prefix.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::{DestDir, EntryPath};
/// use std::path::Path;
///
/// # fn main() -> fileway_core::Result<()> {
/// let dest = DestDir::create("out")?;
///
/// let ok = EntryPath::validate(Path::new("sub/b.txt"), &dest)?;
/// assert_eq!(ok.as_path(), Path::new("sub/b.txt"));
///
/// assert!(EntryPath::validate(Path::new("../escape"), &dest).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath(PathBuf);

impl EntryPath {
    /// Validates `raw` as a destination-relative entry name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathTraversal`] when the name is empty, absolute,
    /// contains a `..` component, or would otherwise resolve outside `dest`.
    pub fn validate(raw: &Path, dest: &DestDir) -> Result<Self> {
        let mut normalized = PathBuf::new();

        for component in raw.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::PathTraversal {
                        path: raw.to_path_buf(),
                    });
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(Error::PathTraversal {
                path: raw.to_path_buf(),
            });
        }

        // The destination is canonical and the name is now a plain relative
        // path, so component-wise prefix containment is exact.
        let resolved = dest.as_path().join(&normalized);
        if !resolved.starts_with(dest.as_path()) {
            return Err(Error::PathTraversal {
                path: raw.to_path_buf(),
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the validated relative path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

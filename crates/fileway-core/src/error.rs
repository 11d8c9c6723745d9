//! Error types shared by every fileway operation.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during fileway operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The absent path.
        path: PathBuf,
    },

    /// The destination is occupied and overwriting was not requested.
    #[error("already exists: {path}")]
    AlreadyExists {
        /// The occupied path.
        path: PathBuf,
    },

    /// A directory was required but something else was found.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A directory copy would place the copy inside the source itself.
    #[error("cannot copy {path} into itself or a descendant of itself")]
    CopyIntoSelf {
        /// The source directory.
        path: PathBuf,
    },

    /// An entry name would resolve outside the destination directory.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The entry name that attempted traversal.
        path: PathBuf,
    },

    /// Archive is corrupted, truncated, or not a zip file.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// A request body or form exceeded the permitted size.
    #[error("body exceeds limit of {limit} bytes")]
    BodyTooLarge {
        /// The limit that was exceeded, in bytes.
        limit: u64,
    },

    /// Reading an inbound request body failed.
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),

    /// The outbound request to an upstream server failed.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// A multipart form could not be parsed.
    #[error("multipart form error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl Error {
    /// Returns `true` if this error represents a security violation.
    ///
    /// Today that is only [`Error::PathTraversal`]: an archive entry or
    /// uploaded file name that would have written outside its destination.
    /// Such inputs are hostile or corrupt and the whole operation is aborted.
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns the offending path for path-shaped errors, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::AlreadyExists { path }
            | Self::NotADirectory { path }
            | Self::CopyIntoSelf { path }
            | Self::PathTraversal { path } => Some(path),
            _ => None,
        }
    }

    /// Maps an I/O error to a typed variant when its kind identifies the
    /// path-shaped failure, keeping the offending path in the error.
    pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "not found: missing.txt");
    }

    #[test]
    fn test_path_traversal_display() {
        let err = Error::PathTraversal {
            path: PathBuf::from("../etc/passwd"),
        };
        assert!(err.to_string().contains("path traversal"));
        assert!(err.to_string().contains("../etc/passwd"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_io_maps_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = Error::from_io(io_err, Path::new("gone.txt"));
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.path(), Some(Path::new("gone.txt")));
    }

    #[test]
    fn test_from_io_maps_already_exists() {
        let io_err = io::Error::new(io::ErrorKind::AlreadyExists, "occupied");
        let err = Error::from_io(io_err, Path::new("dst"));
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }

    #[test]
    fn test_from_io_passes_through_other_kinds() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from_io(io_err, Path::new("secret"));
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_is_security_violation() {
        let err = Error::PathTraversal {
            path: PathBuf::from("../escape"),
        };
        assert!(err.is_security_violation());

        let err = Error::InvalidArchive("truncated".into());
        assert!(!err.is_security_violation());

        let err = Error::AlreadyExists {
            path: PathBuf::from("dst"),
        };
        assert!(!err.is_security_violation());
    }

    #[test]
    fn test_zip_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = zip::result::ZipError::Io(io_err).into();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Error conversion utilities for the CLI.
//!
//! Converts fileway-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use fileway_core::Error;
use std::path::Path;

/// Converts a core [`Error`] to a user-friendly anyhow error with context.
pub fn convert_error(err: Error, subject: &Path) -> anyhow::Error {
    match err {
        Error::PathTraversal { path } => {
            anyhow!(
                "Security violation: '{}' contains an entry escaping the destination ('{}')\n\
                 HINT: This archive may be malicious. Do not extract archives from untrusted sources.",
                subject.display(),
                path.display()
            )
        }
        Error::AlreadyExists { path } => {
            anyhow!(
                "Refusing to overwrite '{}'\n\
                 HINT: Remove the existing path or choose a different destination.",
                path.display()
            )
        }
        Error::NotFound { path } => {
            anyhow!("No such file or directory: {}", path.display())
        }
        Error::NotADirectory { path } => {
            anyhow!("Not a directory: {}", path.display())
        }
        Error::CopyIntoSelf { path } => {
            anyhow!(
                "Cannot copy '{}' into itself or one of its own subdirectories",
                path.display()
            )
        }
        Error::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {reason}\n\
                 HINT: The file may be corrupted or not a zip archive.",
                subject.display()
            )
        }
        Error::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {io_err}",
                subject.display()
            )
        }
        other => anyhow::Error::from(other)
            .context(format!("error processing '{}'", subject.display())),
    }
}

/// Adds path context to a core result.
pub fn add_path_context<T>(
    result: fileway_core::Result<T>,
    subject: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_error(e, subject))
}

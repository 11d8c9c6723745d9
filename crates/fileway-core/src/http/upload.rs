//! Persisting request bodies and multipart uploads to disk.

use std::path::Path;

use axum::body::Body;
use axum::body::to_bytes;
use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;
use tracing::warn;

use crate::Error;
use crate::Result;
use crate::classify::classify;
use crate::report::UploadReport;
use crate::types::DestDir;
use crate::types::EntryPath;

/// Upper bound on request bodies persisted by [`save_request_body`]
/// (10 MiB). The whole body is buffered in memory before the write.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Saves an inbound request body to `path`.
///
/// With `overwrite` false, an occupied target fails with
/// [`Error::AlreadyExists`] before the body is read; a permission failure
/// while probing the target surfaces as an error rather than being treated
/// as "absent". The body is read fully into memory, so it is capped at
/// [`MAX_BODY_BYTES`]. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`], [`Error::BodyTooLarge`],
/// [`Error::BodyRead`], or an I/O error from the write.
pub async fn save_request_body(body: Body, path: &Path, overwrite: bool) -> Result<u64> {
    if !overwrite && classify(path)?.exists() {
        return Err(Error::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let bytes = read_limited(body, MAX_BODY_BYTES).await?;
    tokio::fs::write(path, &bytes).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "saved request body");

    Ok(bytes.len() as u64)
}

/// Writes every named part of a multipart form under `dir`.
///
/// The directory is created (with parents) if absent; a regular file at
/// that path is [`Error::AlreadyExists`]. Each part is named by its file
/// name, falling back to the field name, and that name is validated for
/// containment under `dir` exactly like an archive entry; a traversal
/// attempt aborts the whole form. Intermediate directories named by the
/// parts are created as needed. `size_limit` caps the cumulative bytes
/// across all parts.
///
/// Parts written before a failure remain on disk; there is no rollback.
///
/// # Errors
///
/// Returns [`Error::Multipart`] when the form cannot be parsed,
/// [`Error::PathTraversal`] for an escaping part name,
/// [`Error::BodyTooLarge`] when `size_limit` is exceeded,
/// [`Error::AlreadyExists`] when a file occupies `dir`, or an I/O error
/// from the writes.
pub async fn save_multipart_form(
    mut form: Multipart,
    dir: &Path,
    size_limit: u64,
) -> Result<UploadReport> {
    let dest = DestDir::ensure(dir)?;
    let mut report = UploadReport::default();

    while let Some(field) = form.next_field().await? {
        let Some(name) = part_name(field.file_name(), field.name()) else {
            warn!("skipping unnamed multipart field");
            continue;
        };

        let entry = EntryPath::validate(Path::new(&name), &dest)?;
        let data: Bytes = field.bytes().await?;

        let total = report
            .bytes_written
            .checked_add(data.len() as u64)
            .filter(|total| *total <= size_limit)
            .ok_or(Error::BodyTooLarge { limit: size_limit })?;

        let target = dest.join(&entry);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &data).await?;
        debug!(path = %target.display(), bytes = data.len(), "saved multipart part");

        report.files_saved += 1;
        report.bytes_written = total;
    }

    Ok(report)
}

/// The name a part is stored under: its file name when present, the field
/// name otherwise.
fn part_name(file_name: Option<&str>, field_name: Option<&str>) -> Option<String> {
    file_name
        .or(field_name)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

async fn read_limited(body: Body, limit: usize) -> Result<Bytes> {
    to_bytes(body, limit).await.map_err(|err| {
        let inner = err.into_inner();
        if is_length_limit(inner.as_ref()) {
            Error::BodyTooLarge {
                limit: limit as u64,
            }
        } else {
            Error::BodyRead(axum::Error::new(inner))
        }
    })
}

fn is_length_limit(err: &(dyn std::error::Error + 'static)) -> bool {
    if err.is::<http_body_util::LengthLimitError>() {
        return true;
    }
    err.source().is_some_and(is_length_limit)
}

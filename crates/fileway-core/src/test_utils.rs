//! Test helpers for building zip fixtures.
//!
//! Entry names are written into the archive exactly as given, so hostile
//! names (`../escape`, absolute paths) can be produced for extraction
//! tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

/// Builds an in-memory zip archive from (name, contents) pairs.
///
/// Files are stored uncompressed with mode 0o644; a name ending in `/`
/// becomes a directory entry (mode 0o755, contents ignored).
///
/// # Examples
///
/// ```
/// use fileway_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);
    let dir_options = SimpleFileOptions::default().unix_permissions(0o755);

    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, dir_options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// Writes an archive built by [`create_test_zip`] to `path`.
pub fn write_test_zip(path: &Path, entries: &[(&str, &[u8])]) {
    std::fs::write(path, create_test_zip(entries)).unwrap();
}

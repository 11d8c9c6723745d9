//! Zip archive extraction with path containment enforcement.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use zip::ZipArchive;

use crate::Error;
use crate::Result;
use crate::io::CopyBuffer;
use crate::io::copy_with_buffer;
use crate::report::ExtractReport;
use crate::types::DestDir;
use crate::types::EntryPath;

/// Extracts a zip archive into a freshly created destination directory.
///
/// The destination must not exist; it is created by this call and an
/// occupied path fails with [`Error::AlreadyExists`] before anything is
/// read. Entries are processed in the archive's stored order, and every
/// entry name is validated for containment under the destination before
/// anything is written; the first violating entry aborts the whole
/// extraction with [`Error::PathTraversal`].
///
/// Stored unix permission bits are restored on extracted files and
/// directories. Entry readers and output handles are scoped to one loop
/// iteration each, so descriptor usage stays flat over archives with many
/// entries.
///
/// On failure partway through, files extracted so far remain on disk; there
/// is no rollback. Callers needing atomicity should extract into a
/// temporary location and rename on success.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the archive file does not exist,
/// [`Error::InvalidArchive`] when it cannot be parsed,
/// [`Error::AlreadyExists`] when the destination is occupied,
/// [`Error::PathTraversal`] for an escaping entry name, or an I/O error
/// from the writes.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::extract;
///
/// # fn main() -> fileway_core::Result<()> {
/// let report = extract("upload.zip", "unpacked")?;
/// println!("extracted {} entries", report.total_items());
/// # Ok(())
/// # }
/// ```
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_path: Q,
) -> Result<ExtractReport> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path).map_err(|e| Error::from_io(e, archive_path))?;
    let mut archive = ZipArchive::new(file)?;

    let dest = DestDir::create(dest_path.as_ref())?;
    let mut report = ExtractReport::default();
    let mut buffer = CopyBuffer::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let entry_name = entry.name().to_owned();
        let entry_path = EntryPath::validate(Path::new(&entry_name), &dest)?;
        let target = dest.join(&entry_path);
        let mode = entry.unix_mode();

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            apply_mode(&target, mode)?;
            report.directories_created += 1;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(File::create(&target)?);
            report.bytes_written += copy_with_buffer(&mut entry, &mut writer, &mut buffer)?;
            writer.flush()?;
            drop(writer);
            apply_mode(&target, mode)?;
            report.files_extracted += 1;
        }
    }

    Ok(report)
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> Result<()> {
    Ok(())
}

//! Zip archive creation.

use std::fs::File;
use std::io::Seek;
use std::io::Write;
use std::path::Component;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::Error;
use crate::Result;
use crate::classify::PathKind;
use crate::classify::classify;
use crate::io::CopyBuffer;
use crate::io::copy_with_buffer;
use crate::report::PackReport;

/// Packs a single regular file into a new zip archive.
///
/// The archive holds exactly one entry, named by the source's file name.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the source does not exist, or an I/O
/// error when the archive cannot be written. On error the output file may
/// exist but be incomplete; treat it as garbage.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::pack_file;
///
/// # fn main() -> fileway_core::Result<()> {
/// pack_file("report.pdf", "report.zip")?;
/// # Ok(())
/// # }
/// ```
pub fn pack_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, archive: Q) -> Result<PackReport> {
    let source = source.as_ref();
    let entry_name = source
        .file_name()
        .map(Path::new)
        .ok_or_else(|| Error::NotFound {
            path: source.to_path_buf(),
        })?;

    let mut zip = ZipWriter::new(File::create(archive.as_ref())?);
    let mut report = PackReport::default();
    let mut buffer = CopyBuffer::new();

    add_file(&mut zip, source, entry_name, &mut report, &mut buffer)?;
    zip.finish()?;

    Ok(report)
}

/// Packs every regular file under `source` into a new zip archive.
///
/// The tree is walked depth-first in file-name order, so the archive layout
/// is deterministic for a given tree. Entries are named by their path
/// relative to `source` (the root prefix is stripped, never a leading
/// separator left behind). Directories are not stored, so empty directories
/// are silently omitted, and symlinks are neither followed nor stored.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the source does not exist,
/// [`Error::NotADirectory`] when it is not a directory, or an I/O error
/// from the walk or the writes. Any failure aborts the whole operation;
/// the output file may exist but be incomplete.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::pack_dir;
///
/// # fn main() -> fileway_core::Result<()> {
/// let report = pack_dir("site/assets", "assets.zip")?;
/// println!("packed {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn pack_dir<P: AsRef<Path>, Q: AsRef<Path>>(source: P, archive: Q) -> Result<PackReport> {
    let source = source.as_ref();
    match classify(source)? {
        PathKind::Directory => {}
        PathKind::Missing => {
            return Err(Error::NotFound {
                path: source.to_path_buf(),
            });
        }
        PathKind::File => {
            return Err(Error::NotADirectory {
                path: source.to_path_buf(),
            });
        }
    }

    let mut zip = ZipWriter::new(File::create(archive.as_ref())?);
    let mut report = PackReport::default();
    let mut buffer = CopyBuffer::new();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            Error::Io(std::io::Error::other(format!(
                "walked entry {} lies outside the packed root",
                entry.path().display()
            )))
        })?;
        add_file(&mut zip, entry.path(), relative, &mut report, &mut buffer)?;
    }
    zip.finish()?;

    Ok(report)
}

/// Opens `file_path` and streams it into the archive under `entry_name`.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    entry_name: &Path,
    report: &mut PackReport,
    buffer: &mut CopyBuffer,
) -> Result<()> {
    let mut file = File::open(file_path).map_err(|e| Error::from_io(e, file_path))?;
    let metadata = file.metadata()?;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };
    #[cfg(not(unix))]
    let _ = &metadata;

    zip.start_file(zip_entry_name(entry_name), options)?;
    report.bytes_read += copy_with_buffer(&mut file, zip, buffer)?;
    report.files_added += 1;

    Ok(())
}

/// Renders a relative path as a forward-slash zip entry name.
fn zip_entry_name(path: &Path) -> String {
    let mut name = String::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            if !name.is_empty() {
                name.push('/');
            }
            name.push_str(&part.to_string_lossy());
        }
    }
    name
}

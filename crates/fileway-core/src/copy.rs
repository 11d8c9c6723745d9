//! File and directory duplication.

use std::env;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::Error;
use crate::Result;
use crate::classify::PathKind;
use crate::classify::classify;
use crate::io::CopyBuffer;
use crate::io::copy_with_buffer;

/// Copies a single file byte-for-byte to a new path.
///
/// The destination is created or truncated. Returns the number of bytes
/// copied.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the source does not exist, or an I/O
/// error when reading or writing fails.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<u64> {
    let source = source.as_ref();
    let mut input = File::open(source).map_err(|e| Error::from_io(e, source))?;
    let mut output = File::create(dest.as_ref())?;
    let mut buffer = CopyBuffer::new();
    copy_with_buffer(&mut input, &mut output, &mut buffer)
}

/// Recursively copies a directory tree to a new path.
///
/// The destination must not exist; it is created by this call. The tree is
/// walked in file-name order; regular files are copied byte-for-byte and
/// directories are recreated. Symlinks are skipped.
///
/// Copying a directory into itself or into one of its own descendants is
/// rejected; containment is decided on canonical paths, so symlinks and
/// relative spellings of the same location are seen through.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the source does not exist,
/// [`Error::NotADirectory`] when it is not a directory,
/// [`Error::CopyIntoSelf`] when the destination lies inside the source,
/// [`Error::AlreadyExists`] when the destination is occupied, or an I/O
/// error from the walk or the writes.
pub fn copy_dir<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

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

    let canonical_source = source.canonicalize()?;
    let abs_dest = absolute(dest)?;
    // The destination does not exist yet, so containment is decided on its
    // nearest existing ancestor.
    if let Some(ancestor) = abs_dest.ancestors().find(|p| p.exists()) {
        if ancestor.canonicalize()?.starts_with(&canonical_source) {
            return Err(Error::CopyIntoSelf {
                path: source.to_path_buf(),
            });
        }
    }

    fs::create_dir(dest).map_err(|e| Error::from_io(e, dest))?;

    let mut buffer = CopyBuffer::new();
    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            Error::Io(std::io::Error::other(format!(
                "walked entry {} lies outside the copied root",
                entry.path().display()
            )))
        })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            let mut input = File::open(entry.path())?;
            let mut output = File::create(&target)?;
            copy_with_buffer(&mut input, &mut output, &mut buffer)?;
        }
    }

    Ok(())
}

/// Returns the names of a directory's immediate children, sorted.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the directory does not exist, or an
/// I/O error when it cannot be read.
pub fn children_of_dir<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| Error::from_io(e, path))? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Resolves a possibly relative path against the current directory without
/// touching the filesystem.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

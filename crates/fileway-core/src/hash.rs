//! Streaming file hashing.

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use digest::Digest;

use crate::Error;
use crate::Result;
use crate::io::CopyBuffer;
use crate::io::copy_with_buffer;

/// Streams a file through the digest `D` and returns the lowercase
/// hexadecimal digest.
///
/// The file is read in chunks, never loaded whole, so arbitrarily large
/// files hash in constant memory.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the file does not exist, or an I/O
/// error when reading fails.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::file_hash;
/// use md5::Md5;
/// use sha2::Sha256;
///
/// # fn main() -> fileway_core::Result<()> {
/// let md5 = file_hash::<Md5>("logo.png")?;
/// let sha256 = file_hash::<Sha256>("logo.png")?;
/// # Ok(())
/// # }
/// ```
pub fn file_hash<D: Digest>(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::from_io(e, path))?;
    let mut writer = DigestWriter(D::new());
    let mut buffer = CopyBuffer::new();

    copy_with_buffer(&mut file, &mut writer, &mut buffer)?;

    Ok(hex::encode(writer.0.finalize()))
}

/// Feeds every written chunk into the wrapped digest.
struct DigestWriter<D: Digest>(D);

impl<D: Digest> Write for DigestWriter<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use md5::Md5;
    use sha2::Sha256;
    use tempfile::TempDir;

    #[test]
    fn test_sha256_known_digest() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("hello.txt");
        std::fs::write(&file, "hello world").unwrap();

        assert_eq!(
            file_hash::<Sha256>(&file).unwrap(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_md5_known_digest() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("hello.txt");
        std::fs::write(&file, "hello world").unwrap();

        assert_eq!(
            file_hash::<Md5>(&file).unwrap(),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn test_empty_file_digest() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("empty");
        std::fs::write(&file, "").unwrap();

        assert_eq!(
            file_hash::<Sha256>(&file).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = file_hash::<Sha256>(temp.path().join("gone"));
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }
}

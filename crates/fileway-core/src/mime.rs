//! Content-type detection.

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use crate::Error;
use crate::Result;

/// Number of leading bytes inspected when sniffing.
const SNIFF_LEN: usize = 512;

/// Guesses the MIME type of a file from its first 512 bytes.
///
/// Magic-number signatures are consulted first; prefixes that look like
/// UTF-8 text fall back to `text/plain; charset=utf-8`; after that the file
/// extension is consulted, and the final fallback is
/// `application/octet-stream`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the file does not exist, or an I/O
/// error when reading fails.
///
/// # Examples
///
/// ```no_run
/// use fileway_core::file_content_type;
///
/// # fn main() -> fileway_core::Result<()> {
/// let mime = file_content_type("logo.png")?;
/// assert_eq!(mime, "image/png");
/// # Ok(())
/// # }
/// ```
pub fn file_content_type<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::from_io(e, path))?;

    let mut buf = [0u8; SNIFF_LEN];
    let mut filled = 0;
    while filled < SNIFF_LEN {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    let prefix = &buf[..filled];

    if let Some(kind) = infer::get(prefix) {
        return Ok(kind.mime_type().to_owned());
    }
    if looks_like_text(prefix) {
        return Ok("text/plain; charset=utf-8".to_owned());
    }
    Ok(mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string())
}

/// Whether a sniffed prefix is plausibly UTF-8 text: valid up to at most a
/// multi-byte sequence cut off at the sniff boundary, with no control
/// characters besides whitespace.
fn looks_like_text(prefix: &[u8]) -> bool {
    if prefix.is_empty() {
        return false;
    }
    let valid = match std::str::from_utf8(prefix) {
        Ok(s) => s,
        Err(e) if e.error_len().is_none() && e.valid_up_to() > 0 => {
            std::str::from_utf8(&prefix[..e.valid_up_to()]).unwrap_or("")
        }
        Err(_) => return false,
    };
    !valid.chars().any(|c| c.is_control() && !c.is_whitespace())
}

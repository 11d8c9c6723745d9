//! Buffered streaming copy shared by the archive, copy, and hash helpers.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::Error;
use crate::Result;

/// Buffer size for streaming I/O (64 KiB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable buffer for streaming copies.
///
/// One buffer serves every file visited during a pack, extract, or directory
/// copy, so the allocation happens once per operation rather than once per
/// entry.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Vec<u8>,
}

impl CopyBuffer {
    /// Creates a new copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE],
        }
    }

    /// Returns the buffer size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies everything from `reader` to `writer` through the provided buffer.
///
/// Interrupted reads are retried; the total byte count is tracked with
/// checked arithmetic. Returns the number of bytes copied.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Io(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(Error::Io)?;

        total = total
            .checked_add(bytes_read as u64)
            .ok_or_else(|| Error::Io(io::Error::other("byte counter overflow")))?;
    }

    Ok(total)
}

//! Buffered stream copy with progress reporting.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ExtractionError;
use crate::ProgressCallback;

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable copy buffer shared by all entries of one extraction.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Vec<u8>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE],
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `reader` into `writer`, reporting each chunk to `progress`.
///
/// Returns the number of bytes copied. Read and write failures both surface
/// as `ExtractionError::Io`.
pub fn copy_with_progress<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<u64, ExtractionError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExtractionError::Io(e)),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;

        let chunk = bytes_read as u64;
        total = total.saturating_add(chunk);
        progress.on_bytes_written(chunk);
    }

    Ok(total)
}

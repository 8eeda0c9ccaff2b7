use std::io::{Error, ErrorKind, Read, Write};

use tracing::trace;

/// Write every byte of `data` to `stream` (blocking).
///
/// Short writes resume from the first unwritten byte and `Interrupted` retries
/// the same attempt. Any other failure is returned as-is so the OS error code
/// survives. A write that accepts nothing fails with `WriteZero`.
pub fn write_all<W: Write + ?Sized>(stream: &mut W, data: &[u8]) -> std::io::Result<()> {
    let mut offset = 0usize;
    while offset < data.len() {
        match stream.write(&data[offset..]) {
            Ok(0) => {
                return Err(Error::new(
                    ErrorKind::WriteZero,
                    format!("stream accepted 0 of {} remaining bytes", data.len() - offset),
                ))
            }
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                trace!(offset, "write interrupted, retrying");
                continue;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Fill `buffer` completely from `handle` (blocking).
///
/// Callers bound `buffer` by the known remaining length. Running out of data
/// early is reported as `UnexpectedEof` instead of looping forever.
pub fn read_all<R: Read + ?Sized>(handle: &mut R, buffer: &mut [u8]) -> std::io::Result<()> {
    let mut offset = 0usize;
    while offset < buffer.len() {
        match handle.read(&mut buffer[offset..]) {
            Ok(0) => {
                return Err(Error::new(
                    ErrorKind::UnexpectedEof,
                    format!(
                        "end of input with {} of {} bytes outstanding",
                        buffer.len() - offset,
                        buffer.len()
                    ),
                ))
            }
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                trace!(offset, "read interrupted, retrying");
                continue;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Flush `stream`, retrying on `Interrupted`.
pub fn flush_all<W: Write + ?Sized>(stream: &mut W) -> std::io::Result<()> {
    loop {
        match stream.flush() {
            Ok(()) => return Ok(()),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

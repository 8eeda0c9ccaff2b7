use std::io::Write;

use mycat_io::{flush_all, read_all, write_all, InputHandle, InputSource};
use tracing::{debug, warn};

use crate::error::{Result, TransferError};
use crate::escape::escape_into;
use crate::mode::Mode;

/// Label attached to errors raised while flushing the output itself.
pub const OUTPUT_LABEL: &str = "<stdout>";

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Inputs fully drained.
    pub files: usize,
    /// Bytes pulled from inputs.
    pub bytes_read: u64,
    /// Bytes pushed to the output, after escaping.
    pub bytes_written: u64,
}

/// Pulls inputs through a fixed chunk buffer into one output stream.
///
/// Buffers are acquired once in [`Transfer::new`] and reused for every input.
/// Inputs are processed strictly one after another.
pub struct Transfer<W> {
    out: W,
    mode: Mode,
    chunk: Vec<u8>,
    escaped: Vec<u8>,
    stats: TransferStats,
}

impl<W: Write> Transfer<W> {
    /// Acquire the buffers `mode` needs.
    pub fn new(out: W, mode: Mode) -> Result<Self> {
        let mut chunk = acquire(mode.chunk_capacity())?;
        chunk.resize(mode.chunk_capacity(), 0);
        let escaped = acquire(mode.escape_capacity())?;

        Ok(Self {
            out,
            mode,
            chunk,
            escaped,
            stats: TransferStats::default(),
        })
    }

    /// Drain every handle in order, then flush the output.
    ///
    /// The first read or write failure aborts the run; handles not yet
    /// reached are dropped without being read.
    pub fn run<R, I>(&mut self, handles: I) -> Result<TransferStats>
    where
        R: InputSource,
        I: IntoIterator<Item = InputHandle<R>>,
    {
        for handle in handles {
            self.copy(handle)?;
        }
        self.flush()?;
        Ok(self.stats)
    }

    /// Drain one handle into the output and close it.
    pub fn copy<R: InputSource>(&mut self, mut handle: InputHandle<R>) -> Result<()> {
        if self.mode == Mode::Help {
            close_logged(handle);
            return Ok(());
        }

        let mut remaining = handle.probe_len().map_err(TransferError::Probe)?;
        let capacity = self.chunk.len() as u64;

        while remaining > 0 {
            let size = remaining.min(capacity) as usize;
            let chunk = &mut self.chunk[..size];

            read_all(handle.get_mut(), chunk).map_err(|source| TransferError::Read {
                handle: handle.label().to_string(),
                source,
            })?;

            let data: &[u8] = match self.mode {
                Mode::EscapeHidden => {
                    self.escaped.clear();
                    escape_into(chunk, &mut self.escaped);
                    &self.escaped
                }
                Mode::Normal | Mode::Help => &*chunk,
            };

            write_all(&mut self.out, data).map_err(|source| TransferError::Write {
                handle: handle.label().to_string(),
                source,
            })?;

            self.stats.bytes_read += size as u64;
            self.stats.bytes_written += data.len() as u64;
            remaining -= size as u64;
        }

        self.stats.files += 1;
        close_logged(handle);
        Ok(())
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> Result<()> {
        flush_all(&mut self.out).map_err(|source| TransferError::Write {
            handle: OUTPUT_LABEL.to_string(),
            source,
        })
    }

    /// Totals so far.
    pub fn stats(&self) -> TransferStats {
        self.stats
    }

    /// Mode fixed at construction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Borrow the output stream.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the transfer and return the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Transfer `handles` to `out` in order.
///
/// `Mode::Help` performs no I/O and reports empty totals.
pub fn transfer<R, I, W>(handles: I, mode: Mode, out: W) -> Result<TransferStats>
where
    R: InputSource,
    I: IntoIterator<Item = InputHandle<R>>,
    W: Write,
{
    if mode == Mode::Help {
        debug!("help mode, skipping transfer");
        return Ok(TransferStats::default());
    }

    let mut transfer = Transfer::new(out, mode)?;
    let stats = transfer.run(handles)?;
    debug!(
        files = stats.files,
        bytes_read = stats.bytes_read,
        bytes_written = stats.bytes_written,
        ?mode,
        "transfer complete"
    );
    Ok(stats)
}

fn acquire(capacity: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| TransferError::Allocation {
            requested: capacity,
        })?;
    Ok(buf)
}

fn close_logged<R: InputSource>(handle: InputHandle<R>) {
    if let Err(err) = handle.close() {
        warn!(error = %err, "close failed, continuing");
    }
}

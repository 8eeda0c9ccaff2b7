//! Ordered, chunked transfer of input handles to a single output stream.
//!
//! Every input is length-probed, then pulled through a fixed buffer in
//! chunks and pushed to the output. In [`Mode::EscapeHidden`] each chunk is
//! passed through [`escape_into`] first, so bytes that are neither printable
//! nor whitespace appear as `\x00NN`.

pub mod error;
pub mod escape;
pub mod mode;
pub mod pipeline;

pub use error::{Result, TransferError};
pub use escape::{escape, escape_into, is_visible, ESCAPE_WIDTH};
pub use mode::{Mode, ESCAPE_CHUNK_CAPACITY, NORMAL_CHUNK_CAPACITY};
pub use pipeline::{transfer, Transfer, TransferStats, OUTPUT_LABEL};

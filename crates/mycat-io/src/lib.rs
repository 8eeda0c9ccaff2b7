//! Interrupt-safe I/O primitives for mycat.
//!
//! This is the lowest layer of mycat:
//! - [`read_all`] / [`write_all`] loop over short transfers and `EINTR`
//! - [`InputHandle`] pairs a seekable source with the path it came from
//! - [`InputSource`] adds an explicit, fallible close on top of `Read + Seek`

pub mod error;
pub mod handle;
pub mod reliable;

pub use error::{IoError, Result};
pub use handle::{InputHandle, InputSource};
pub use reliable::{flush_all, read_all, write_all};

//! Concatenate files to standard output, optionally escaping hidden bytes.
//!
//! # Crate Structure
//!
//! - [`io`] — Interrupt-safe read/write primitives and closable input handles
//! - [`transfer`] — Ordered chunked transfer and the hex escaping transform

/// Re-export I/O primitives.
pub mod io {
    pub use mycat_io::*;
}

/// Re-export transfer pipeline types.
pub mod transfer {
    pub use mycat_transfer::*;
}

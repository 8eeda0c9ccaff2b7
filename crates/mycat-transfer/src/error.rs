use mycat_io::IoError;

/// Errors that abort a transfer run.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// A transfer or escape buffer could not be acquired.
    #[error("unable to allocate {requested} byte buffer")]
    Allocation { requested: usize },

    /// The input length could not be determined.
    #[error(transparent)]
    Probe(IoError),

    /// Reading a chunk from an input failed.
    #[error("failed to read {handle}: {source}")]
    Read {
        handle: String,
        source: std::io::Error,
    },

    /// Writing a chunk to the output failed.
    #[error("failed to write {handle}: {source}")]
    Write {
        handle: String,
        source: std::io::Error,
    },
}

impl TransferError {
    /// OS error code of the failed operation, if one was reported.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            TransferError::Allocation { .. } => None,
            TransferError::Probe(err) => err.os_code(),
            TransferError::Read { source, .. } | TransferError::Write { source, .. } => {
                source.raw_os_error()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;

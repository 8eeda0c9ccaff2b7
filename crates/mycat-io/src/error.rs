use std::path::PathBuf;

/// Errors raised while opening, probing, or closing input handles.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// The path could not be opened for reading.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seeking to determine the input length failed.
    #[error("failed to determine length of {label}: {source}")]
    Probe {
        label: String,
        source: std::io::Error,
    },

    /// Releasing the underlying descriptor failed.
    #[error("failed to close {label}: {source}")]
    Close {
        label: String,
        source: std::io::Error,
    },
}

impl IoError {
    /// OS error code carried by the underlying failure, if any.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            IoError::Open { source, .. }
            | IoError::Probe { source, .. }
            | IoError::Close { source, .. } => source.raw_os_error(),
        }
    }

    /// Borrow the underlying I/O error.
    pub fn io(&self) -> &std::io::Error {
        match self {
            IoError::Open { source, .. }
            | IoError::Probe { source, .. }
            | IoError::Close { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IoError>;

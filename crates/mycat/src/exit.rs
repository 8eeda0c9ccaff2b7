use std::fmt;
use std::io;

use mycat_io::IoError;
use mycat_transfer::TransferError;

// Process exit codes reported by `mycat`.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSFER_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn code_for(err: &io::Error, fallback: i32) -> i32 {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => fallback,
    }
}

/// Map an input-handle failure.
///
/// Open failures happen before any byte is transferred; probe failures abort
/// the run mid-way.
pub fn input_error(err: IoError) -> CliError {
    let code = match &err {
        IoError::Open { source, .. } => code_for(source, FAILURE),
        IoError::Probe { source, .. } => code_for(source, TRANSFER_ERROR),
        // Close failures are only logged by the pipeline and never returned.
        IoError::Close { source, .. } => code_for(source, INTERNAL),
    };
    CliError::new(code, err.to_string())
}

/// Map a failure that aborted the transfer run.
pub fn transfer_error(err: TransferError) -> CliError {
    match err {
        TransferError::Allocation { .. } => CliError::new(INTERNAL, err.to_string()),
        TransferError::Probe(inner) => input_error(inner),
        TransferError::Read { ref source, .. } | TransferError::Write { ref source, .. } => {
            CliError::new(code_for(source, TRANSFER_ERROR), err.to_string())
        }
    }
}

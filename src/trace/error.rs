use thiserror::Error;

/// Error type for trace parsing
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed trace line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Result type for trace operations
pub type Result<T> = std::result::Result<T, TraceError>;

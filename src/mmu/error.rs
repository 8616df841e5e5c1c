use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MmuError {
    #[error("Invalid frame count {0}: an MMU needs at least one frame")]
    InvalidFrameCount(usize),
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),
    #[error("MMU invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for MMU construction
pub type Result<T> = std::result::Result<T, MmuError>;

// Mutation Error Types

use thiserror::Error;

/// Mutation operation that was attempted on a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Push,
    Set,
    Remove,
}

impl std::fmt::Display for MutationOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationOp::Push => write!(f, "push"),
            MutationOp::Set => write!(f, "set"),
            MutationOp::Remove => write!(f, "remove"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("unsupported operation: {0}")]
    Unsupported(MutationOp),

    #[error("index out of bounds: {index} (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

impl MutationError {
    /// Failure category name, as reported by the probe sequence
    pub fn kind(&self) -> &'static str {
        match self {
            MutationError::Unsupported(_) => "unsupported operation",
            MutationError::OutOfBounds { .. } => "index out of bounds",
        }
    }
}

pub type Result<T> = std::result::Result<T, MutationError>;

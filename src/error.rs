//! Error types for queue operations

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Storage for a node slot or a payload could not be obtained.
    /// The queue is left untouched.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// The operation needs more elements than the queue holds.
    #[error("queue is empty")]
    Empty,
}

use thiserror::Error;

/// Error types for `growvec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// The instance was never created, or it has been destroyed
    #[error("Instance is not initialized: it was never created or has been destroyed")]
    NotInitialized,
    /// An argument violates a documented precondition
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the violated precondition
        reason: &'static str,
    },
    /// Index or cursor position is outside the live elements
    #[error("Index out of range: index {index} is outside a container of length {length}")]
    OutOfRange {
        /// Position that was accessed
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Backing storage could not be obtained
    #[error("Allocation failure: could not obtain room for {requested} elements")]
    AllocationFailure {
        /// Number of element slots that were requested
        requested: usize,
    },
    /// Cursor used after an operation that relocated or resized the container
    #[error("Stale cursor: the container was relocated or resized after the cursor was issued")]
    StaleIterator,
    /// A search yielded no match
    #[error("No match found")]
    NotFound,
}

pub type Result<T> = core::result::Result<T, GrowVecError>;

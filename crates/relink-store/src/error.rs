//! Store error types.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the flat-file stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id is already on the admin list.
    #[error("operator {id} is already an admin")]
    AlreadyAdmin {
        /// The duplicate id.
        id: u64,
    },

    /// The id is not on the admin list.
    #[error("operator {id} is not an admin")]
    UnknownAdmin {
        /// The missing id.
        id: u64,
    },

    /// Filesystem failure reading or persisting a store file.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The statistics file could not be serialized.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("coupon id already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the coupon service.
#[derive(Debug, Clone, Error)]
pub enum CouponError {
    #[error("coupon id already exists: {0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for CouponError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(id) => Self::Conflict(id),
            other => Self::Storage(other.to_string()),
        }
    }
}

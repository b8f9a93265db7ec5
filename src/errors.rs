use thiserror::Error;
use uuid::Uuid;

/// Error type that captures persistence failures.
///
/// Storage errors never invalidate the in-memory session; the tracker logs
/// them and continues with memory as the source of truth.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Rejection reasons for entries submitted to the tracker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entry name must not be empty")]
    EmptyName,
    #[error("Entry calories must not be negative: {0}")]
    NegativeCalories(i64),
    #[error("Duplicate entry id: {0}")]
    DuplicateId(Uuid),
}

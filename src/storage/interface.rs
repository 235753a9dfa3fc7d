use crate::coordinates::models::Coordinate;
use crate::storage::models::LocationRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum StorageError {
    /// The backend could not be reached for this call. Later calls may succeed.
    #[error("storage backend is unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend failed: {0}")]
    Unknown(String),
}

/// Persistence backend for location records.
///
/// Implementations assign identifiers and creation times themselves and must never expose a
/// record before it is fully stored.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn insert(&self, coordinate: Coordinate) -> Result<LocationRecord, StorageError>;

    async fn recent(&self, limit: usize) -> Result<Vec<LocationRecord>, StorageError>;

    async fn close(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

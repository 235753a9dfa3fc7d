use crate::coordinates::models::Coordinate;
use crate::storage::interface::{LocationStore, StorageError};
use crate::storage::models::{newest_first, LocationRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryLocationStore {
    storage: Arc<RwLock<Vec<LocationRecord>>>,
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn insert(&self, coordinate: Coordinate) -> Result<LocationRecord, StorageError> {
        let mut records = self.storage.write().await;
        let record = LocationRecord::create(coordinate, records.last().map(|last| last.created_at));
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<LocationRecord>, StorageError> {
        Ok(newest_first(&self.storage.read().await, limit))
    }
}

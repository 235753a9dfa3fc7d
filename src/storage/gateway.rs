use crate::coordinates::models::Coordinate;
use crate::storage::interface::{LocationStore, StorageError};
use crate::storage::models::LocationRecord;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single entry point for reads and writes against the location store.
///
/// Cheap to clone, every clone shares the same backend handle.
#[derive(Clone)]
pub struct LocationGateway {
    store: Arc<dyn LocationStore>,
    available: Arc<AtomicBool>,
}

impl LocationGateway {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self {
            store,
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub async fn save(&self, coordinate: Coordinate) -> Result<LocationRecord, StorageError> {
        let result = self.store.insert(coordinate).await;
        self.observe(&result);
        result
    }

    pub async fn list_recent(&self, limit: usize) -> Result<Vec<LocationRecord>, StorageError> {
        let result = self.store.recent(limit).await;
        self.observe(&result);
        result
    }

    /// Whether the last storage call reached the backend.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    pub async fn shutdown(&self) -> Result<(), StorageError> {
        self.store.close().await
    }

    fn observe<T>(&self, result: &Result<T, StorageError>) {
        let reachable = !matches!(result, Err(StorageError::Unavailable(_)));
        let was_reachable = self.available.swap(reachable, Ordering::Relaxed);
        if was_reachable && !reachable {
            tracing::warn!(
                task = "storage_availability",
                available = false,
                "Storage backend became unavailable."
            );
        } else if !was_reachable && reachable {
            tracing::info!(
                task = "storage_availability",
                available = true,
                "Storage backend is reachable again."
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::consts::RECENT_LOCATIONS_LIMIT;
    use crate::storage::memory::InMemoryLocationStore;
    use crate::storage::tests::FlakyStore;
    use std::collections::HashSet;

    fn gateway() -> LocationGateway {
        LocationGateway::new(Arc::new(InMemoryLocationStore::default()))
    }

    fn coordinate(latitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude: -latitude,
        }
    }

    #[tokio::test]
    async fn save_keeps_values_exactly() {
        let saved = gateway()
            .save(Coordinate {
                latitude: 37.7749,
                longitude: -122.4194,
            })
            .await
            .unwrap();

        assert_eq!(saved.latitude, 37.7749);
        assert_eq!(saved.longitude, -122.4194);
    }

    #[tokio::test]
    async fn saving_twice_creates_two_records() {
        let gateway = gateway();

        let first = gateway.save(coordinate(1.0)).await.unwrap();
        let second = gateway.save(coordinate(1.0)).await.unwrap();

        assert_ne!(first.identifier, second.identifier);
        assert_eq!(gateway.list_recent(10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_recent_caps_at_limit_newest_first() {
        let gateway = gateway();
        for index in 0..12 {
            gateway.save(coordinate(index as f64)).await.unwrap();
        }

        let recent = gateway.list_recent(RECENT_LOCATIONS_LIMIT).await.unwrap();

        let latitudes: Vec<f64> = recent.iter().map(|record| record.latitude).collect();
        assert_eq!(
            latitudes,
            vec![11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0]
        );
        assert!(recent
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
        let identifiers: HashSet<_> = recent.iter().map(|record| record.identifier).collect();
        assert_eq!(identifiers.len(), RECENT_LOCATIONS_LIMIT);
    }

    #[tokio::test]
    async fn list_recent_returns_everything_below_limit() {
        let gateway = gateway();
        for index in 0..3 {
            gateway.save(coordinate(index as f64)).await.unwrap();
        }

        assert_eq!(
            gateway.list_recent(RECENT_LOCATIONS_LIMIT).await.unwrap().len(),
            3
        );
    }

    #[tokio::test]
    async fn list_recent_does_not_mutate() {
        let gateway = gateway();
        gateway.save(coordinate(1.0)).await.unwrap();

        let first = gateway.list_recent(10).await.unwrap();
        let second = gateway.list_recent(10).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn availability_follows_the_backend() {
        let store = Arc::new(FlakyStore::default());
        let gateway = LocationGateway::new(store.clone());

        store.set_reachable(false);
        let failed = gateway.save(coordinate(1.0)).await;
        assert!(matches!(failed, Err(StorageError::Unavailable(_))));
        assert!(!gateway.is_available());

        store.set_reachable(true);
        gateway.save(coordinate(2.0)).await.unwrap();
        assert!(gateway.is_available());
        assert_eq!(gateway.list_recent(10).await.unwrap().len(), 1);
    }
}

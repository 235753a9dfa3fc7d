use crate::coordinates::models::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub identifier: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl LocationRecord {
    /// Stamps a coordinate with a fresh identifier and creation time.
    ///
    /// The creation time never goes below `last_created_at`, so records stay ordered even if the
    /// wall clock steps backwards between two writes.
    pub fn create(coordinate: Coordinate, last_created_at: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            identifier: Uuid::new_v4(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            created_at: last_created_at.map_or(now, |last| last.max(now)),
        }
    }
}

/// Up to `limit` records, newest first. `records` must be in insertion order.
pub fn newest_first(records: &[LocationRecord], limit: usize) -> Vec<LocationRecord> {
    records.iter().rev().take(limit).cloned().collect()
}

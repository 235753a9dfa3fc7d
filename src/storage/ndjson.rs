use crate::coordinates::models::Coordinate;
use crate::storage::interface::{LocationStore, StorageError};
use crate::storage::models::{newest_first, LocationRecord};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Durable backend keeping one JSON-encoded record per line.
///
/// All records are read once on [`NdjsonLocationStore::open`] and served from memory afterwards.
/// A record is only added to the in-memory view after its line has been written and synced.
pub struct NdjsonLocationStore {
    path: PathBuf,
    records: RwLock<Vec<LocationRecord>>,
    closed: AtomicBool,
}

impl NdjsonLocationStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let records = match fs::read_to_string(&path).await {
            Ok(contents) => parse_records(&path, &contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(unavailable("read the locations file", err)),
        };
        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Opened the locations file."
        );
        Ok(Self {
            path,
            records: RwLock::new(records),
            closed: AtomicBool::new(false),
        })
    }

    fn ensure_open(&self) -> Result<(), StorageError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StorageError::Unavailable(String::from(
                "the locations file was closed",
            )));
        }
        Ok(())
    }

    async fn append(&self, line: &[u8]) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| unavailable("open the locations file", err))?;
        let length_before = file
            .metadata()
            .await
            .map_err(|err| unavailable("inspect the locations file", err))?
            .len();
        let written = match file.write_all(line).await {
            Ok(()) => file.sync_data().await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            // Drop whatever part of the line made it to disk.
            if let Err(truncate_err) = file.set_len(length_before).await {
                tracing::error!(
                    path = %self.path.display(),
                    "Failed to roll back a partially written record: {truncate_err}"
                );
            }
            return Err(unavailable("write to the locations file", err));
        }
        Ok(())
    }
}

#[async_trait]
impl LocationStore for NdjsonLocationStore {
    async fn insert(&self, coordinate: Coordinate) -> Result<LocationRecord, StorageError> {
        let mut records = self.records.write().await;
        self.ensure_open()?;
        let record = LocationRecord::create(coordinate, records.last().map(|last| last.created_at));
        let mut line = serde_json::to_vec(&record)
            .map_err(|err| StorageError::Unknown(format!("failed to encode a record: {err}")))?;
        line.push(b'\n');
        self.append(&line).await?;
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<LocationRecord>, StorageError> {
        let records = self.records.read().await;
        self.ensure_open()?;
        match fs::metadata(&self.path).await {
            Ok(_) => {}
            // Nothing was written yet.
            Err(err) if err.kind() == io::ErrorKind::NotFound && records.is_empty() => {}
            Err(err) => return Err(unavailable("inspect the locations file", err)),
        }
        Ok(newest_first(&records, limit))
    }

    async fn close(&self) -> Result<(), StorageError> {
        // Calls check `closed` under the lock, so none can slip in after this.
        let _records = self.records.write().await;
        self.closed.store(true, Ordering::Release);
        tracing::info!(path = %self.path.display(), "Closed the locations file.");
        Ok(())
    }
}

fn parse_records(path: &Path, contents: &str) -> Vec<LocationRecord> {
    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<LocationRecord>(line) {
            Ok(record) => records.push(record),
            Err(err) => tracing::warn!(
                path = %path.display(),
                line = index + 1,
                "Skipping an unreadable record: {err}"
            ),
        }
    }
    records
}

fn unavailable(action: &str, err: io::Error) -> StorageError {
    StorageError::Unavailable(format!("failed to {action}: {err}"))
}

use crate::cli::Args;
use crate::storage::interface::{LocationStore, StorageError};
use crate::storage::memory::InMemoryLocationStore;
use crate::storage::ndjson::NdjsonLocationStore;
use std::sync::Arc;

pub mod consts;
pub mod gateway;
pub mod interface;
pub mod memory;
pub mod models;
pub mod ndjson;

/// Opens the backend selected on the command line.
pub async fn open(args: &Args) -> Result<Arc<dyn LocationStore>, StorageError> {
    match &args.storage_path {
        Some(path) => Ok(Arc::new(NdjsonLocationStore::open(path).await?)),
        None => {
            tracing::warn!("No `--storage-path` given. Locations will be kept in memory only.");
            Ok(Arc::new(InMemoryLocationStore::default()))
        }
    }
}

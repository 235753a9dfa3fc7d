use crate::cli::Args;
use crate::storage;
use crate::storage::gateway::LocationGateway;
use crate::storage::interface::{LocationStore, StorageError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub locations: LocationGateway,
}

impl AppContext {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self {
            locations: LocationGateway::new(store),
        }
    }
}

pub async fn init(args: &Args) -> Result<AppContext, StorageError> {
    let store = storage::open(args).await?;
    Ok(AppContext::new(store))
}

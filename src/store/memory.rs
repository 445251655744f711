// src/store/memory.rs

use async_trait::async_trait;

use super::{EventStore, Snapshot};
use crate::{analytics::filter::TimeWindow, error::AppError};

/// `EventStore` over a fixed set of records held in memory.
/// Used by the integration tests and for running the API without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn load(&self, _window: &TimeWindow) -> Result<Snapshot, AppError> {
        Ok(self.snapshot.clone())
    }

    async fn load_directory(&self) -> Result<Snapshot, AppError> {
        Ok(Snapshot {
            accounts: self.snapshot.accounts.clone(),
            reviews: self.snapshot.reviews.clone(),
            ..Snapshot::default()
        })
    }
}

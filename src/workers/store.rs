//! Worker persistence over the `workers` collection.

use std::sync::Arc;

use crate::error::StoreError;
use crate::store::{Collection, Record, StorageBackend};

use super::model::{NewWorker, Worker, WorkerQuery};

impl Record for Worker {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Store for worker profiles (`workers.json`). Workers are append-only:
/// no update or delete operation exists for them.
pub struct WorkerStore {
    collection: Collection<Worker>,
}

impl WorkerStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            collection: Collection::new(backend, "workers"),
        }
    }

    /// Full collection, storage order.
    pub async fn list(&self) -> Result<Vec<Worker>, StoreError> {
        self.collection.load().await
    }

    /// Append a new worker and persist.
    pub async fn create(&self, input: NewWorker) -> Result<Worker, StoreError> {
        self.collection
            .insert_with(|id| Worker::new(id, input))
            .await
    }

    /// Filter the full collection by the query.
    pub async fn search(&self, query: &WorkerQuery) -> Result<Vec<Worker>, StoreError> {
        let workers = self.list().await?;
        Ok(workers.into_iter().filter(|w| query.matches(w)).collect())
    }
}

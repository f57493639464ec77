//! Task persistence over the `tasks` collection.

use std::sync::Arc;

use crate::error::StoreError;
use crate::store::{Collection, Record, StorageBackend};

use super::model::{NewTask, Task, TaskPatch};

impl Record for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Store for posted tasks (`tasks.json`).
pub struct TaskStore {
    collection: Collection<Task>,
}

impl TaskStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            collection: Collection::new(backend, "tasks"),
        }
    }

    /// Full collection, storage order.
    pub async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.collection.load().await
    }

    /// Append a new task and persist.
    pub async fn create(&self, input: NewTask) -> Result<Task, StoreError> {
        self.collection.insert_with(|id| Task::new(id, input)).await
    }

    /// Merge `patch` over the task with `id` and persist. Returns `None`
    /// (and writes nothing) when no such task exists.
    pub async fn update(&self, id: u64, patch: TaskPatch) -> Result<Option<Task>, StoreError> {
        self.collection
            .try_modify(|tasks| {
                let task = tasks.iter_mut().find(|t| t.id == id)?;
                task.apply(patch);
                Some(task.clone())
            })
            .await
    }

    /// Remove the task with `id` and persist, returning the removed record.
    /// Returns `None` (and writes nothing) when no such task exists.
    pub async fn delete(&self, id: u64) -> Result<Option<Task>, StoreError> {
        self.collection
            .try_modify(|tasks| {
                let index = tasks.iter().position(|t| t.id == id)?;
                Some(tasks.remove(index))
            })
            .await
    }
}

//! Whole-document JSON collections.
//!
//! A `Collection<T>` is a JSON array persisted as a single document
//! (`<name>.json`). Every operation reloads the full array from the
//! backend, so a handler always observes the latest stored state, and
//! every mutation rewrites the full array. Sequential ids come from a
//! `{"nextId": N}` sidecar document (`<name>.meta.json`) and are never
//! reused after a delete. Read-modify-write cycles are serialized behind
//! a per-collection mutex so interleaved creates cannot allocate the
//! same id.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::backend::StorageBackend;
use crate::error::StoreError;

/// A record with a numeric identifier.
pub trait Record {
    fn id(&self) -> u64;
}

/// Persisted id-allocation state, stored next to the array document.
#[derive(Debug, Serialize, Deserialize)]
struct Meta {
    #[serde(rename = "nextId")]
    next_id: u64,
}

/// A flat, file-backed collection of records.
pub struct Collection<T> {
    backend: Arc<dyn StorageBackend>,
    name: &'static str,
    write_lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Record + Clone + Serialize + DeserializeOwned,
{
    pub fn new(backend: Arc<dyn StorageBackend>, name: &'static str) -> Self {
        Self {
            backend,
            name,
            write_lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    fn document(&self) -> String {
        format!("{}.json", self.name)
    }

    fn meta_document(&self) -> String {
        format!("{}.meta.json", self.name)
    }

    /// Load the full collection, in storage order.
    ///
    /// An absent document means an empty collection; content that fails to
    /// parse surfaces as [`StoreError::Malformed`].
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let document = self.document();
        match self.backend.read(&document).await? {
            None => Ok(Vec::new()),
            Some(contents) => serde_json::from_str(&contents)
                .map_err(|source| StoreError::Malformed { document, source }),
        }
    }

    /// Persist the full collection, pretty-printed.
    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;
        self.backend.write(&self.document(), &contents).await
    }

    /// Next id to hand out: the persisted counter, floored by the ids
    /// already present (covers a data dir copied without its sidecar).
    async fn next_id(&self, records: &[T]) -> Result<u64, StoreError> {
        let document = self.meta_document();
        let persisted = match self.backend.read(&document).await? {
            Some(contents) => {
                serde_json::from_str::<Meta>(&contents)
                    .map_err(|source| StoreError::Malformed { document, source })?
                    .next_id
            }
            None => 1,
        };
        let floor = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Ok(persisted.max(floor))
    }

    /// Append a record built from a freshly allocated id, and persist.
    pub async fn insert_with(&self, build: impl FnOnce(u64) -> T) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let id = self.next_id(&records).await?;
        let record = build(id);
        records.push(record.clone());
        // The counter advances before the array is rewritten: a failure
        // between the two writes must not lead to a reused id.
        let meta = serde_json::to_string_pretty(&Meta { next_id: id + 1 })
            .map_err(StoreError::Serialize)?;
        self.backend.write(&self.meta_document(), &meta).await?;
        self.save(&records).await?;
        Ok(record)
    }

    /// Run a mutation over the loaded records. The closure returns `Some`
    /// to commit (the full collection is rewritten) or `None` to decline,
    /// in which case nothing is written.
    pub async fn try_modify<R>(
        &self,
        apply: impl FnOnce(&mut Vec<T>) -> Option<R>,
    ) -> Result<Option<R>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        match apply(&mut records) {
            Some(out) => {
                self.save(&records).await?;
                Ok(Some(out))
            }
            None => Ok(None),
        }
    }
}

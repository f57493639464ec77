//! In-memory storage backend for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::backend::StorageBackend;
use crate::error::StoreError;

/// Keeps documents in a map.
#[derive(Default)]
pub struct MemoryBackend {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.read().await.get(name).cloned())
    }

    async fn write(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        self.documents
            .write()
            .await
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

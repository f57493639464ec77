//! Backend-agnostic persistence trait.

use async_trait::async_trait;

use crate::error::StoreError;

/// A named-document storage backend.
///
/// Documents are opaque strings addressed by name; the collection layer
/// decides what goes in them. `JsonFileBackend` is the production
/// implementation, `MemoryBackend` exists so store and handler logic can
/// be tested without touching disk.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read a document. Returns `None` if it has never been written.
    async fn read(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a document in full.
    async fn write(&self, name: &str, contents: &str) -> Result<(), StoreError>;
}

//! File-backed storage — one document per file under a base directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::backend::StorageBackend;
use crate::error::StoreError;

/// Stores each document as `<base_dir>/<name>`.
pub struct JsonFileBackend {
    base_dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn read(&self, name: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(name)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn write(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        let path = self.path_for(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        // Write to a sibling temp file, then rename over the target, so a
        // concurrent reader never observes a half-written document.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

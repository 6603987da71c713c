use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use flm_core::{KeyValueStore, KeyValueStoreError};

/// Key/value entries persisted as one JSON object on disk.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so a crash never leaves a half written file behind.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, KeyValueStoreError> {
        match tokio::fs::read(self.path.as_path()).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| KeyValueStoreError::CorruptStorage(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(KeyValueStoreError::StorageError(e.to_string())),
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), KeyValueStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| KeyValueStoreError::StorageError(e.to_string()))?;
        }

        let bytes = serde_json::to_vec_pretty(items)
            .map_err(|e| KeyValueStoreError::StorageError(e.to_string()))?;
        let tmp_path = self.temp_path();

        let written = match tokio::fs::write(&tmp_path, bytes).await {
            Ok(()) => tokio::fs::rename(&tmp_path, self.path.as_path()).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(KeyValueStoreError::StorageError(e.to_string()));
        }
        Ok(())
    }

    /// A sibling of the store file, unique per write and per process.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!("{}.{}.tmp", name, Uuid::new_v4()))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    #[tracing::instrument(name = "FileKeyValueStore::set_item", skip(self, value))]
    async fn set_item(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value);
        self.write_all(&items).await
    }

    #[tracing::instrument(name = "FileKeyValueStore::remove_item", skip(self))]
    async fn remove_item(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_all().await?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&items).await
    }
}

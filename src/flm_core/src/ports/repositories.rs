use async_trait::async_trait;
use thiserror::Error;

// KeyValueStore port trait and errors
#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Corrupt storage: {0}")]
    CorruptStorage(String),
}

/// Durable string key/value storage, the client-side equivalent of the
/// browser's local storage. Survives a restart of the process but not a
/// fresh installation.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
    async fn set_item(&self, key: &str, value: String) -> Result<(), KeyValueStoreError>;
    async fn remove_item(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use flm_core::{KeyValueStore, KeyValueStoreError};

#[derive(Debug, Default, Clone)]
pub struct HashMapKeyValueStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl HashMapKeyValueStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for HashMapKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        let mut items = self.items.write().await;
        items.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}

use std::sync::Arc;
use tokio::sync::RwLock;

use flm_core::Navigator;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub path: String,
    pub state: Option<serde_json::Value>,
}

/// Navigator that keeps the visited locations in order.
#[derive(Debug, Default, Clone)]
pub struct HistoryNavigator {
    history: Arc<RwLock<Vec<Location>>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self {
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn current(&self) -> Option<Location> {
        self.history.read().await.last().cloned()
    }

    pub async fn history(&self) -> Vec<Location> {
        self.history.read().await.clone()
    }
}

#[async_trait::async_trait]
impl Navigator for HistoryNavigator {
    async fn go_to(&self, path: &str, state: Option<serde_json::Value>) {
        tracing::info!(path, "Navigating");
        self.history.write().await.push(Location {
            path: path.to_string(),
            state,
        });
    }
}

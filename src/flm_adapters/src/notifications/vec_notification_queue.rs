use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use flm_core::{Notification, NotificationQueue};

/// In-memory notification queue shared by every caller of one client.
#[derive(Debug, Default, Clone)]
pub struct VecNotificationQueue {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl VecNotificationQueue {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Current records, oldest first.
    pub async fn snapshot(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    /// Removes one record; returns whether it was present.
    pub async fn dismiss(&self, id: Uuid) -> bool {
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.id() != id || !n.is_dismissible());
        notifications.len() != before
    }

    /// Takes every record out of the queue.
    pub async fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.write().await)
    }
}

#[async_trait::async_trait]
impl NotificationQueue for VecNotificationQueue {
    async fn append(&self, notification: Notification) {
        tracing::debug!(
            id = %notification.id(),
            severity = ?notification.severity(),
            "Notification queued"
        );
        self.notifications.write().await.push(notification);
    }
}

use std::sync::Arc;

use flm_core::{ChatApi, GroupId, Navigator, NormalizedError, Notification, NotificationQueue};

use super::report_failure;

/// Creates a group and opens its message view.
///
/// Navigation only happens once the server has answered with the new id.
pub struct CreateGroupUseCase<A, Q, N>
where
    A: ChatApi,
    Q: NotificationQueue,
    N: Navigator,
{
    api: Arc<A>,
    notifications: Q,
    navigator: N,
    messages_path: String,
}

impl<A, Q, N> CreateGroupUseCase<A, Q, N>
where
    A: ChatApi,
    Q: NotificationQueue,
    N: Navigator,
{
    pub fn new(api: Arc<A>, notifications: Q, navigator: N, messages_path: impl Into<String>) -> Self {
        Self {
            api,
            notifications,
            navigator,
            messages_path: messages_path.into(),
        }
    }

    #[tracing::instrument(name = "CreateGroupUseCase::execute", skip(self))]
    pub async fn execute(&self, name: &str) -> Result<GroupId, NormalizedError> {
        let group_id = match self.api.create_group(name).await {
            Ok(group_id) => group_id,
            Err(error) => {
                report_failure(&self.notifications, &error, "Failed to create group").await;
                return Err(error);
            }
        };

        self.notifications
            .append(Notification::success(format!(
                "Group \"{}\" created successfully",
                name.trim()
            )))
            .await;

        let path = format!("{}/{}", self.messages_path.trim_end_matches('/'), group_id);
        self.navigator
            .go_to(&path, Some(serde_json::json!({ "groupCreated": true })))
            .await;

        Ok(group_id)
    }
}

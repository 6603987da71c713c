use std::sync::Arc;

use flm_core::{
    ChatApi, GroupId, MembershipResult, MessageList, NormalizedError, Notification,
    NotificationQueue, UserId,
};

use super::report_failure;

pub struct FetchMessagesUseCase<A, Q>
where
    A: ChatApi,
    Q: NotificationQueue,
{
    api: Arc<A>,
    notifications: Q,
}

impl<A, Q> FetchMessagesUseCase<A, Q>
where
    A: ChatApi,
    Q: NotificationQueue,
{
    pub fn new(api: Arc<A>, notifications: Q) -> Self {
        Self { api, notifications }
    }

    #[tracing::instrument(name = "FetchMessagesUseCase::execute", skip(self))]
    pub async fn execute(&self, group_id: &GroupId) -> Result<MessageList, NormalizedError> {
        let result = self.api.fetch_messages(group_id).await;
        if let Err(error) = &result {
            report_failure(&self.notifications, error, "Failed to load messages").await;
        }
        result
    }
}

pub struct AddMemberUseCase<A, Q>
where
    A: ChatApi,
    Q: NotificationQueue,
{
    api: Arc<A>,
    notifications: Q,
}

impl<A, Q> AddMemberUseCase<A, Q>
where
    A: ChatApi,
    Q: NotificationQueue,
{
    pub fn new(api: Arc<A>, notifications: Q) -> Self {
        Self { api, notifications }
    }

    #[tracing::instrument(name = "AddMemberUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<MembershipResult, NormalizedError> {
        match self.api.add_user_to_group(user_id, group_id).await {
            Ok(result) => {
                self.notifications
                    .append(Notification::success("User added to the group"))
                    .await;
                Ok(result)
            }
            Err(error) => {
                report_failure(&self.notifications, &error, "Failed to add user to group").await;
                Err(error)
            }
        }
    }
}

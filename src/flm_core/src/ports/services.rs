use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::{
    group::{GroupId, UserId},
    normalized_error::NormalizedError,
    notification::Notification,
    registration::{Registration, RegistrationResult},
    session::LoginPayload,
};

/// Ordered collection of notification records. The core only appends;
/// removal belongs to whoever renders them.
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    async fn append(&self, notification: Notification);
}

/// Client-side navigation.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn go_to(&self, path: &str, state: Option<serde_json::Value>);
}

/// Messages of a group, exactly as served.
pub type MessageList = Vec<serde_json::Value>;

/// Whatever the server answers to a membership change.
pub type MembershipResult = serde_json::Value;

/// Authenticated access to the messaging API. Every failure comes back
/// already normalized.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<LoginPayload, NormalizedError>;

    async fn register(
        &self,
        registration: Registration,
    ) -> Result<RegistrationResult, NormalizedError>;

    async fn logout(&self) -> Result<(), NormalizedError>;

    async fn create_group(&self, name: &str) -> Result<GroupId, NormalizedError>;

    async fn fetch_messages(&self, group_id: &GroupId) -> Result<MessageList, NormalizedError>;

    async fn add_user_to_group(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<MembershipResult, NormalizedError>;
}

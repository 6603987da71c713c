use std::sync::Arc;

use flm_adapters::{config::endpoints, http::ApiClient};
use flm_core::{
    ChatApi, CreatedGroup, Credentials, GroupId, GroupName, KeyValueStore, LoginPayload,
    MembershipResult, MessageList, NormalizedError, Registration, RegistrationResult,
    SessionStore, UserId,
};
use secrecy::Secret;
use serde::Serialize;

/// Entry point to the messaging API.
///
/// Holds nothing but the shared transport and a handle on the session
/// store; the session itself lives in the store. Instances are only created
/// by [`crate::ClientContext`], which installs the interceptors first.
pub struct AuthService<K>
where
    K: KeyValueStore,
{
    transport: Arc<ApiClient>,
    session_store: SessionStore<K>,
}

impl<K> AuthService<K>
where
    K: KeyValueStore,
{
    pub(crate) fn new(transport: Arc<ApiClient>, session_store: SessionStore<K>) -> Self {
        Self {
            transport,
            session_store,
        }
    }

    /// Calls the protected `GET /fetch` endpoint; useful to check that the stored
    /// session is still accepted.
    #[tracing::instrument(name = "AuthService::test_route", skip_all)]
    pub async fn test_route(&self) -> Result<serde_json::Value, NormalizedError> {
        self.transport
            .get(endpoints::FETCH)
            .await
            .map_err(NormalizedError::from)
    }
}

#[async_trait::async_trait]
impl<K> ChatApi for AuthService<K>
where
    K: KeyValueStore + 'static,
{
    #[tracing::instrument(name = "AuthService::authenticate", skip_all)]
    async fn authenticate(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<LoginPayload, NormalizedError> {
        let credentials = Credentials::new(username, password);
        self.transport
            .post(endpoints::LOGIN, &credentials.as_request())
            .await
            .map_err(NormalizedError::from)
    }

    #[tracing::instrument(name = "AuthService::register", skip_all)]
    async fn register(
        &self,
        registration: Registration,
    ) -> Result<RegistrationResult, NormalizedError> {
        self.transport
            .post(endpoints::REGISTER, &registration.as_request())
            .await
            .map_err(NormalizedError::from)
    }

    /// Tells the server, then clears the local session no matter what the
    /// server said. Without a stored token there is nothing to tell the
    /// server, so only the local clear happens.
    #[tracing::instrument(name = "AuthService::logout", skip_all)]
    async fn logout(&self) -> Result<(), NormalizedError> {
        if let Ok(None) = self.session_store.token().await {
            tracing::debug!("No active session, skipping server logout");
            return self
                .session_store
                .clear()
                .await
                .map_err(|e| NormalizedError::new(e.to_string()));
        }

        let response = self
            .transport
            .post_empty::<serde_json::Value>(endpoints::LOGOUT)
            .await;
        let cleared = self.session_store.clear().await;

        response.map_err(NormalizedError::from)?;
        cleared.map_err(|e| NormalizedError::new(e.to_string()))
    }

    #[tracing::instrument(name = "AuthService::create_group", skip(self))]
    async fn create_group(&self, name: &str) -> Result<GroupId, NormalizedError> {
        let name = GroupName::parse(name)?;

        let created: CreatedGroup = self
            .transport
            .post(
                &[endpoints::GROUPS],
                &CreateGroupRequest {
                    name: name.as_str(),
                },
            )
            .await?;
        Ok(created.group_id)
    }

    #[tracing::instrument(name = "AuthService::fetch_messages", skip(self))]
    async fn fetch_messages(&self, group_id: &GroupId) -> Result<MessageList, NormalizedError> {
        Ok(self
            .transport
            .get(&[endpoints::MESSAGES, group_id.as_str()])
            .await?)
    }

    #[tracing::instrument(name = "AuthService::add_user_to_group", skip(self))]
    async fn add_user_to_group(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<MembershipResult, NormalizedError> {
        Ok(self
            .transport
            .post(
                &[endpoints::GROUPS, group_id.as_str(), endpoints::MEMBERS],
                &AddMemberRequest { user_id },
            )
            .await?)
    }
}

#[derive(Serialize)]
struct CreateGroupRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddMemberRequest<'a> {
    user_id: &'a UserId,
}

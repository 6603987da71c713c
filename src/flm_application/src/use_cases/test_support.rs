use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use flm_core::{
    ChatApi, GroupId, GroupName, KeyValueStore, KeyValueStoreError, LoginPayload,
    MembershipResult, MessageList, Navigator, NormalizedError, Notification, NotificationQueue,
    Registration, RegistrationResult, SessionStore, SessionToken, UserId,
};
use secrecy::Secret;
use tokio::sync::RwLock;

/// Canned answers per operation. An operation without one panics when called.
#[derive(Default)]
pub struct MockChatApi {
    pub login: Option<Result<LoginPayload, NormalizedError>>,
    pub register: Option<Result<RegistrationResult, NormalizedError>>,
    pub logout: Option<Result<(), NormalizedError>>,
    pub create_group: Option<Result<GroupId, NormalizedError>>,
    pub messages: Option<Result<MessageList, NormalizedError>>,
    pub add_member: Option<Result<MembershipResult, NormalizedError>>,
    pub(crate) calls: RwLock<Vec<&'static str>>,
}

impl MockChatApi {
    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.read().await.clone()
    }

    async fn record<T: Clone>(
        &self,
        name: &'static str,
        answer: &Option<Result<T, NormalizedError>>,
    ) -> Result<T, NormalizedError> {
        self.calls.write().await.push(name);
        answer
            .clone()
            .unwrap_or_else(|| panic!("unexpected call to {name}"))
    }
}

#[async_trait]
impl ChatApi for MockChatApi {
    async fn authenticate(
        &self,
        _username: &str,
        _password: Secret<String>,
    ) -> Result<LoginPayload, NormalizedError> {
        self.record("authenticate", &self.login).await
    }

    async fn register(
        &self,
        _registration: Registration,
    ) -> Result<RegistrationResult, NormalizedError> {
        self.record("register", &self.register).await
    }

    async fn logout(&self) -> Result<(), NormalizedError> {
        self.record("logout", &self.logout).await
    }

    async fn create_group(&self, name: &str) -> Result<GroupId, NormalizedError> {
        // Mirrors the real service: blank names never reach the network.
        GroupName::parse(name)?;
        self.record("create_group", &self.create_group).await
    }

    async fn fetch_messages(&self, _group_id: &GroupId) -> Result<MessageList, NormalizedError> {
        self.record("fetch_messages", &self.messages).await
    }

    async fn add_user_to_group(
        &self,
        _user_id: &UserId,
        _group_id: &GroupId,
    ) -> Result<MembershipResult, NormalizedError> {
        self.record("add_user_to_group", &self.add_member).await
    }
}

#[derive(Clone, Default)]
pub struct RecordingQueue {
    records: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingQueue {
    pub async fn records(&self) -> Vec<Notification> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl NotificationQueue for RecordingQueue {
    async fn append(&self, notification: Notification) {
        self.records.write().await.push(notification);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<RwLock<Vec<(String, Option<serde_json::Value>)>>>,
}

impl RecordingNavigator {
    pub async fn paths(&self) -> Vec<String> {
        self.visits
            .read()
            .await
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub async fn last_state(&self) -> Option<serde_json::Value> {
        self.visits.read().await.last().and_then(|(_, s)| s.clone())
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn go_to(&self, path: &str, state: Option<serde_json::Value>) {
        self.visits.write().await.push((path.to_string(), state));
    }
}

#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

pub fn memory_session_store() -> SessionStore<MemoryKeyValueStore> {
    SessionStore::new(MemoryKeyValueStore::default())
}

pub fn login_payload(token: &str, username: &str) -> LoginPayload {
    LoginPayload {
        token: SessionToken::new(token),
        profile: serde_json::from_value(serde_json::json!({ "username": username })).unwrap(),
    }
}

use thiserror::Error;

use crate::{
    domain::session::{Session, SessionToken, UserProfile},
    ports::repositories::{KeyValueStore, KeyValueStoreError},
};

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_PROFILE_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Key value store error: {0}")]
    KeyValueStoreError(#[from] KeyValueStoreError),
    #[error("Unreadable user profile: {0}")]
    InvalidProfile(String),
}

/// The current token and user profile, kept as two entries of a
/// [`KeyValueStore`]. At most one session is current; `put` overwrites.
///
/// There is no expiry: a stale token stays current until it is cleared
/// here or the server rejects it.
#[derive(Debug, Clone)]
pub struct SessionStore<K>
where
    K: KeyValueStore,
{
    storage: K,
}

impl<K> SessionStore<K>
where
    K: KeyValueStore,
{
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    #[tracing::instrument(name = "SessionStore::put", skip_all)]
    pub async fn put(
        &self,
        token: &SessionToken,
        profile: &UserProfile,
    ) -> Result<(), SessionStoreError> {
        let profile = serde_json::to_string(profile)
            .map_err(|e| SessionStoreError::InvalidProfile(e.to_string()))?;

        // The token goes in last: a token is only ever stored next to its profile.
        let written = match self.storage.set_item(USER_PROFILE_KEY, profile).await {
            Ok(()) => {
                self.storage
                    .set_item(AUTH_TOKEN_KEY, token.expose().to_string())
                    .await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            tracing::warn!(error = %e, "Session write failed, clearing partial session");
            if let Err(cleanup) = self.clear().await {
                tracing::error!(error = %cleanup, "Failed to clear partial session");
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Both entries, or `None` when either is missing.
    pub async fn get(&self) -> Result<Option<Session>, SessionStoreError> {
        let Some(token) = self.token().await? else {
            return Ok(None);
        };
        let Some(profile) = self.profile().await? else {
            return Ok(None);
        };
        Ok(Some(Session { token, profile }))
    }

    pub async fn token(&self) -> Result<Option<SessionToken>, SessionStoreError> {
        Ok(self
            .storage
            .get_item(AUTH_TOKEN_KEY)
            .await?
            .filter(|token| !token.is_empty())
            .map(SessionToken::new))
    }

    pub async fn profile(&self) -> Result<Option<UserProfile>, SessionStoreError> {
        match self.storage.get_item(USER_PROFILE_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| SessionStoreError::InvalidProfile(e.to_string())),
            None => Ok(None),
        }
    }

    /// Removes both entries. Clearing an empty store succeeds.
    #[tracing::instrument(name = "SessionStore::clear", skip_all)]
    pub async fn clear(&self) -> Result<(), SessionStoreError> {
        // Attempt both removals even if the first one fails.
        let token = self.storage.remove_item(AUTH_TOKEN_KEY).await;
        let profile = self.storage.remove_item(USER_PROFILE_KEY).await;
        token?;
        profile?;
        Ok(())
    }
}

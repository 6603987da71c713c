use flm_core::{
    KeyValueStore, Navigator, RequestInterceptor, ResponseInterceptor, SessionStore,
    TransportError,
};
use reqwest::{
    StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

/// Adds `Authorization: Bearer <token>` whenever a session token is stored.
/// Without one the request goes out unauthenticated.
#[derive(Clone)]
pub struct BearerTokenInterceptor<K>
where
    K: KeyValueStore,
{
    session_store: SessionStore<K>,
}

impl<K> BearerTokenInterceptor<K>
where
    K: KeyValueStore,
{
    pub fn new(session_store: SessionStore<K>) -> Self {
        Self { session_store }
    }
}

#[async_trait::async_trait]
impl<K> RequestInterceptor for BearerTokenInterceptor<K>
where
    K: KeyValueStore + 'static,
{
    async fn intercept_request(&self, headers: &mut HeaderMap) -> Result<(), TransportError> {
        let token = self
            .session_store
            .token()
            .await
            .map_err(|e| TransportError::Local(e.to_string()))?;

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&token.bearer())
                .map_err(|e| TransportError::Local(format!("Invalid session token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}

/// Treats any 401 as the end of the session: the store is cleared and the
/// user is sent to the login page. The request itself is not replayed.
#[derive(Clone)]
pub struct UnauthorizedInterceptor<K, N>
where
    K: KeyValueStore,
    N: Navigator,
{
    session_store: SessionStore<K>,
    navigator: N,
    login_path: String,
}

impl<K, N> UnauthorizedInterceptor<K, N>
where
    K: KeyValueStore,
    N: Navigator,
{
    pub fn new(session_store: SessionStore<K>, navigator: N, login_path: impl Into<String>) -> Self {
        Self {
            session_store,
            navigator,
            login_path: login_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl<K, N> ResponseInterceptor for UnauthorizedInterceptor<K, N>
where
    K: KeyValueStore + 'static,
    N: Navigator + 'static,
{
    async fn intercept_response(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }

        tracing::warn!("Server rejected the session, signing out");
        if let Err(e) = self.session_store.clear().await {
            tracing::error!(error = %e, "Failed to clear the session");
        }
        self.navigator.go_to(&self.login_path, None).await;
    }
}

use std::sync::Arc;

use flm_adapters::{
    config::ClientSettings,
    http::{ApiClient, ApiClientError, BearerTokenInterceptor, UnauthorizedInterceptor},
};
use flm_core::{KeyValueStore, Navigator, SessionStore};

use crate::auth_service::AuthService;

/// Composition root of a client process.
///
/// Building a context builds the one transport, installs the interceptor
/// pipeline on it and creates the one [`AuthService`]. Callers get shared
/// handles from here instead of constructing their own.
pub struct ClientContext<K, N>
where
    K: KeyValueStore + Clone + 'static,
    N: Navigator + Clone + 'static,
{
    settings: ClientSettings,
    session_store: SessionStore<K>,
    navigator: N,
    transport: Arc<ApiClient>,
    auth_service: Arc<AuthService<K>>,
}

impl<K, N> ClientContext<K, N>
where
    K: KeyValueStore + Clone + 'static,
    N: Navigator + Clone + 'static,
{
    pub fn new(settings: ClientSettings, storage: K, navigator: N) -> Result<Self, ApiClientError> {
        let session_store = SessionStore::new(storage);

        let transport = ApiClient::builder(settings.api.base_url.clone())
            .timeout(settings.api.timeout())
            .request_interceptor(BearerTokenInterceptor::new(session_store.clone()))
            .response_interceptor(UnauthorizedInterceptor::new(
                session_store.clone(),
                navigator.clone(),
                settings.routes.login_path.clone(),
            ))
            .build()?;
        let transport = Arc::new(transport);

        let auth_service = Arc::new(AuthService::new(transport.clone(), session_store.clone()));

        tracing::info!(base_url = %transport.base_url(), "Client context ready");

        Ok(Self {
            settings,
            session_store,
            navigator,
            transport,
            auth_service,
        })
    }

    pub fn auth_service(&self) -> Arc<AuthService<K>> {
        self.auth_service.clone()
    }

    /// The intercepted transport, for API clients other than [`AuthService`].
    pub fn transport(&self) -> Arc<ApiClient> {
        self.transport.clone()
    }

    pub fn session_store(&self) -> &SessionStore<K> {
        &self.session_store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

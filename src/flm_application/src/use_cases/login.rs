use std::sync::Arc;

use flm_core::{
    ChatApi, KeyValueStore, Navigator, NormalizedError, Notification, NotificationQueue,
    SessionStore, UserProfile,
};
use secrecy::{ExposeSecret, Secret};

use super::report_failure;

/// What the user typed into the sign-in form.
#[derive(Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: Secret<String>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.expose_secret().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.expose_secret().is_empty()
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password = Secret::new(String::new());
    }
}

#[derive(Debug, PartialEq)]
pub enum LoginResponse {
    /// A field was empty, nothing was sent
    Skipped,
    /// The session is stored and the user is on the home page
    Success(UserProfile),
}

/// Sign-in: exchanges the form for a session, stores it and moves on to the
/// home page. A failed attempt is reported and wipes the form.
pub struct LoginUseCase<A, K, Q, N>
where
    A: ChatApi,
    K: KeyValueStore,
    Q: NotificationQueue,
    N: Navigator,
{
    api: Arc<A>,
    session_store: SessionStore<K>,
    notifications: Q,
    navigator: N,
    home_path: String,
}

impl<A, K, Q, N> LoginUseCase<A, K, Q, N>
where
    A: ChatApi,
    K: KeyValueStore,
    Q: NotificationQueue,
    N: Navigator,
{
    pub fn new(
        api: Arc<A>,
        session_store: SessionStore<K>,
        notifications: Q,
        navigator: N,
        home_path: impl Into<String>,
    ) -> Self {
        Self {
            api,
            session_store,
            notifications,
            navigator,
            home_path: home_path.into(),
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, form: &mut LoginForm) -> Result<LoginResponse, NormalizedError> {
        if !form.is_complete() {
            return Ok(LoginResponse::Skipped);
        }

        let result = self
            .api
            .authenticate(&form.username, form.password.clone())
            .await;
        let payload = match result {
            Ok(payload) => payload,
            Err(error) => return Err(self.reject(form, error).await),
        };

        if let Err(e) = self
            .session_store
            .put(&payload.token, &payload.profile)
            .await
        {
            return Err(self.reject(form, NormalizedError::new(e.to_string())).await);
        }

        self.notifications
            .append(Notification::success("You are connected"))
            .await;
        self.navigator.go_to(&self.home_path, None).await;

        Ok(LoginResponse::Success(payload.profile))
    }

    async fn reject(&self, form: &mut LoginForm, error: NormalizedError) -> NormalizedError {
        report_failure(&self.notifications, &error, "Login failed").await;
        form.clear();
        error
    }
}

use std::sync::Arc;

use flm_core::{ChatApi, Navigator, NormalizedError, Notification, NotificationQueue};

use super::report_failure;

/// Signs out and returns to the login page, whether or not the server
/// acknowledged the logout.
pub struct LogoutUseCase<A, Q, N>
where
    A: ChatApi,
    Q: NotificationQueue,
    N: Navigator,
{
    api: Arc<A>,
    notifications: Q,
    navigator: N,
    login_path: String,
}

impl<A, Q, N> LogoutUseCase<A, Q, N>
where
    A: ChatApi,
    Q: NotificationQueue,
    N: Navigator,
{
    pub fn new(api: Arc<A>, notifications: Q, navigator: N, login_path: impl Into<String>) -> Self {
        Self {
            api,
            notifications,
            navigator,
            login_path: login_path.into(),
        }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<(), NormalizedError> {
        let result = self.api.logout().await;

        match &result {
            Ok(()) => {
                self.notifications
                    .append(Notification::info("You are disconnected"))
                    .await
            }
            Err(error) => report_failure(&self.notifications, error, "Logout failed").await,
        }
        self.navigator.go_to(&self.login_path, None).await;

        result
    }
}

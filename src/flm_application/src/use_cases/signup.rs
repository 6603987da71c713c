use std::sync::Arc;

use flm_core::{
    ChatApi, Navigator, NormalizedError, Notification, NotificationQueue, Registration,
    RegistrationResult,
};

use super::report_failure;

/// Registers an account. The user still has to sign in afterwards.
pub struct SignupUseCase<A, Q, N>
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

impl<A, Q, N> SignupUseCase<A, Q, N>
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

    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        registration: Registration,
    ) -> Result<RegistrationResult, NormalizedError> {
        match self.api.register(registration).await {
            Ok(result) => {
                self.notifications
                    .append(Notification::success(
                        "Your account has been created, you can now sign in",
                    ))
                    .await;
                self.navigator.go_to(&self.login_path, None).await;
                Ok(result)
            }
            Err(error) => {
                report_failure(&self.notifications, &error, "Registration failed").await;
                Err(error)
            }
        }
    }
}

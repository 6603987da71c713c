pub mod create_group;
pub mod group_activity;
pub mod login;
pub mod logout;
pub mod signup;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_group::CreateGroupUseCase;
pub use group_activity::{AddMemberUseCase, FetchMessagesUseCase};
pub use login::{LoginForm, LoginResponse, LoginUseCase};
pub use logout::LogoutUseCase;
pub use signup::SignupUseCase;

use flm_core::{NormalizedError, Notification, NotificationQueue};

/// Every failure ends up as exactly one error notification.
pub(crate) async fn report_failure<Q>(notifications: &Q, error: &NormalizedError, fallback: &str)
where
    Q: NotificationQueue,
{
    notifications
        .append(Notification::error(error.message_or(fallback)))
        .await;
}

use flm_adapters::{
    config::ClientSettings, navigation::HistoryNavigator,
    notifications::VecNotificationQueue, persistence::HashMapKeyValueStore,
};
use flm_application::{CreateGroupUseCase, LoginUseCase, LogoutUseCase};
use flm_auth_service::{AuthService, ClientContext};
use flm_core::{SessionToken, UserProfile};
use wiremock::MockServer;

pub type TestContext = ClientContext<HashMapKeyValueStore, HistoryNavigator>;
pub type TestAuthService = AuthService<HashMapKeyValueStore>;

pub struct TestApp {
    pub server: MockServer,
    pub context: TestContext,
    pub notifications: VecNotificationQueue,
}

impl TestApp {
    /// Client pointed at `<mock server>/api`, logged out.
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;
        let context = context_for(format!("{}/api", server.uri()));

        Self {
            server,
            context,
            notifications: VecNotificationQueue::new(),
        }
    }

    pub async fn sign_in_as(&self, token: &str, username: &str) {
        self.context
            .session_store()
            .put(&SessionToken::new(token), &profile(username))
            .await
            .unwrap();
    }

    pub async fn current_path(&self) -> Option<String> {
        self.context
            .navigator()
            .current()
            .await
            .map(|location| location.path)
    }

    pub fn login_use_case(
        &self,
    ) -> LoginUseCase<TestAuthService, HashMapKeyValueStore, VecNotificationQueue, HistoryNavigator>
    {
        LoginUseCase::new(
            self.context.auth_service(),
            self.context.session_store().clone(),
            self.notifications.clone(),
            self.context.navigator().clone(),
            self.context.settings().routes.home_path.clone(),
        )
    }

    pub fn create_group_use_case(
        &self,
    ) -> CreateGroupUseCase<TestAuthService, VecNotificationQueue, HistoryNavigator> {
        CreateGroupUseCase::new(
            self.context.auth_service(),
            self.notifications.clone(),
            self.context.navigator().clone(),
            self.context.settings().routes.messages_path.clone(),
        )
    }

    pub fn logout_use_case(
        &self,
    ) -> LogoutUseCase<TestAuthService, VecNotificationQueue, HistoryNavigator> {
        LogoutUseCase::new(
            self.context.auth_service(),
            self.notifications.clone(),
            self.context.navigator().clone(),
            self.context.settings().routes.login_path.clone(),
        )
    }
}

pub fn context_for(base_url: String) -> TestContext {
    let settings = ClientSettings::for_base_url(base_url).unwrap();
    ClientContext::new(settings, HashMapKeyValueStore::new(), HistoryNavigator::new()).unwrap()
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", address)
}

pub fn profile(username: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({ "username": username, "groups": ["g-1"] })).unwrap()
}

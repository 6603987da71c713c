pub mod domain;
pub mod ports;
pub mod session_store;
pub mod transport;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{Credentials, LoginRequest},
    group::{CreatedGroup, GroupId, GroupName, GroupNameError, UserId},
    normalized_error::NormalizedError,
    notification::{Notification, Severity},
    registration::{Registration, RegistrationRequest, RegistrationResult},
    session::{LoginPayload, Session, SessionToken, UserProfile},
};

pub use ports::{
    repositories::{KeyValueStore, KeyValueStoreError},
    services::{ChatApi, MembershipResult, MessageList, Navigator, NotificationQueue},
};

pub use session_store::{AUTH_TOKEN_KEY, SessionStore, SessionStoreError, USER_PROFILE_KEY};

pub use transport::{
    NETWORK_ERROR_MESSAGE, RequestInterceptor, ResponseInterceptor, TransportError,
};

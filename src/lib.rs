//! # FLM - Messaging client session layer
//!
//! This is a facade crate that re-exports all public APIs from the client components.
//! Use this crate to get access to sign-in, session persistence and authenticated
//! API access in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Credentials`, `SessionToken`, `Notification`, `NormalizedError`, etc.
//! - **Ports**: `KeyValueStore`, `NotificationQueue`, `Navigator`, `ChatApi`
//! - **Use cases**: `LoginUseCase`, `CreateGroupUseCase`, etc.
//! - **Adapters**: `ApiClient`, `FileKeyValueStore`, `VecNotificationQueue`, etc.
//! - **Service**: `ClientContext` - builds the transport and the one `AuthService`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use flm_core::*;
}

// Re-export most commonly used core types at the root level
pub use flm_core::{
    Credentials, GroupId, GroupName, GroupNameError, LoginPayload, NETWORK_ERROR_MESSAGE,
    NormalizedError, Notification, Registration, RegistrationResult, Session, SessionStore,
    SessionStoreError, SessionToken, Severity, TransportError, UserId, UserProfile,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use flm_core::{
        ChatApi, KeyValueStore, KeyValueStoreError, Navigator, NotificationQueue,
        RequestInterceptor, ResponseInterceptor,
    };
}

// Re-export port traits at root level
pub use ports::{ChatApi, KeyValueStore, KeyValueStoreError, Navigator, NotificationQueue};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use flm_application::*;
}

// Re-export use cases at root level
pub use flm_application::{
    AddMemberUseCase, CreateGroupUseCase, FetchMessagesUseCase, LoginForm, LoginResponse,
    LoginUseCase, LogoutUseCase, SignupUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP transport and interceptors
    pub mod http {
        pub use flm_adapters::http::*;
    }

    /// Key/value storage backends
    pub mod persistence {
        pub use flm_adapters::persistence::*;
    }

    /// Notification queue implementations
    pub mod notifications {
        pub use flm_adapters::notifications::*;
    }

    /// Navigator implementations
    pub mod navigation {
        pub use flm_adapters::navigation::*;
    }

    /// Configuration
    pub mod config {
        pub use flm_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use flm_adapters::{
    config::ClientSettings,
    http::{ApiClient, ApiClientError},
    navigation::HistoryNavigator,
    notifications::VecNotificationQueue,
    persistence::{FileKeyValueStore, HashMapKeyValueStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use flm_auth_service::{AuthService, ClientContext, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;

mod auth_service;
mod context;
pub mod telemetry;

pub use auth_service::AuthService;
pub use context::ClientContext;
pub use telemetry::init_tracing;

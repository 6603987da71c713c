pub mod api_client;
pub mod interceptors;

pub use api_client::{ApiClient, ApiClientBuilder, ApiClientError};
pub use interceptors::{BearerTokenInterceptor, UnauthorizedInterceptor};

//! Transport failures and the interceptor hooks wrapped around every call.
//!
//! A failed call is classified once, as a [`TransportError`], by whatever
//! drives the HTTP stack. Converting it into a [`NormalizedError`] is the
//! only way the failure leaves the service layer.

use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use thiserror::Error;

use crate::domain::normalized_error::NormalizedError;

pub const NETWORK_ERROR_MESSAGE: &str = "Network Error: Could not connect to server";

/// How an HTTP call failed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A response arrived with a non-success status.
    #[error("Server responded with status {status}")]
    Responded { status: StatusCode, body: String },
    /// The request left the client but nothing came back.
    #[error("No response received: {0}")]
    NoResponse(String),
    /// The request could not be built or dispatched.
    #[error("{0}")]
    Local(String),
}

impl TransportError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Responded { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for NormalizedError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Responded { status, body } => {
                tracing::error!(%status, body = %body, "API Error");
                NormalizedError::new(server_message(status, &body))
            }
            TransportError::NoResponse(cause) => {
                tracing::error!(%cause, "Network Error");
                NormalizedError::new(NETWORK_ERROR_MESSAGE)
            }
            TransportError::Local(cause) => {
                tracing::error!(%cause, "Error");
                NormalizedError::new(cause)
            }
        }
    }
}

/// Pulls the human readable message out of an error body.
fn server_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(fields)) => {
            for key in ["message", "error"] {
                if let Some(serde_json::Value::String(message)) = fields.get(key) {
                    return message.clone();
                }
            }
        }
        Ok(serde_json::Value::String(message)) => return message,
        _ => {}
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        format!("Request failed with status code {}", status.as_u16())
    } else {
        trimmed.to_string()
    }
}

/// Runs before a request is sent and may rewrite its headers.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn intercept_request(&self, headers: &mut HeaderMap) -> Result<(), TransportError>;
}

/// Observes the status of every response before it is classified.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    async fn intercept_response(&self, status: StatusCode);
}

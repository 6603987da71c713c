use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single failure shape every client operation reports.
///
/// Whatever went wrong (validation, server rejection, unreachable server,
/// local dispatch failure) callers only ever see a message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct NormalizedError {
    message: String,
}

impl NormalizedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message, or `fallback` when the server sent back an empty one.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

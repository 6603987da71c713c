use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One user-facing message waiting to be rendered.
///
/// Records are immutable; the id is unique so the rendering layer can
/// dismiss them one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: Uuid,
    message: String,
    severity: Severity,
    dismissible: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, dismissible: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            dismissible,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, true)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, true)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error, true)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }
}

use std::fmt;

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Opaque bearer token issued by the server on login.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

impl PartialEq for SessionToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

/// The authenticated principal as described by the server.
///
/// Kept as the raw JSON the server sent. Only its presence is checked: a
/// missing or `null` profile is rejected, any other shape is accepted and
/// survives a round trip through the session store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserProfile(serde_json::Value);

impl UserProfile {
    /// `None` when `value` is `null`.
    pub fn new(value: serde_json::Value) -> Option<Self> {
        (!value.is_null()).then_some(Self(value))
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    pub fn username(&self) -> Option<&str> {
        self.get("username").and_then(serde_json::Value::as_str)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| de::Error::custom("user profile is null"))
    }
}

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub token: SessionToken,
    pub profile: UserProfile,
}

/// Token and profile currently persisted for this client.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SessionToken,
    pub profile: UserProfile,
}

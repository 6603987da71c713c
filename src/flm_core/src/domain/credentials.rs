use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

/// Username and password pair sent to the login endpoint.
///
/// Built fresh for every login attempt. The password stays wrapped in a
/// [`Secret`] so neither `Debug` nor tracing output can leak it.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    /// Borrowed JSON body for `POST /auth/login`.
    pub fn as_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            username: &self.username,
            password: self.password.expose_secret(),
        }
    }
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

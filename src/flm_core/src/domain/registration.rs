use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Fields posted to `POST /auth/register`.
#[derive(Debug, Clone)]
pub struct Registration {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: Secret<String>,
}

impl Registration {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        password: Secret<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            password,
        }
    }

    pub fn as_request(&self) -> RegistrationRequest<'_> {
        RegistrationRequest {
            firstname: &self.firstname,
            lastname: &self.lastname,
            email: &self.email,
            password: self.password.expose_secret(),
        }
    }
}

#[derive(Serialize)]
pub struct RegistrationRequest<'a> {
    firstname: &'a str,
    lastname: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Server acknowledgement of a registration. Registering never logs the user in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResult {
    #[serde(default)]
    pub status: String,
}

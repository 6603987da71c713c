pub mod env {
    pub const API_URL_ENV_VAR: &str = "FLM_API_URL";
    pub const SETTINGS_ENV_PREFIX: &str = "FLM";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub const SETTINGS_FILE: &str = "config/client";

pub mod defaults {
    pub const API_BASE_URL: &str = "http://localhost:9090/api";
    pub const LOGIN_PATH: &str = "/login";
    pub const HOME_PATH: &str = "/";
    pub const MESSAGES_PATH: &str = "/t/messages";
    pub const STORAGE_PATH: &str = ".flm/session.json";
}

/// API endpoints, as path segments appended to the base address.
pub mod endpoints {
    pub const LOGIN: &[&str] = &["auth", "login"];
    pub const REGISTER: &[&str] = &["auth", "register"];
    pub const LOGOUT: &[&str] = &["auth", "logout"];
    pub const FETCH: &[&str] = &["fetch"];
    pub const GROUPS: &str = "groups";
    pub const MEMBERS: &str = "members";
    pub const MESSAGES: &str = "messages";
}

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::config::constants::{SETTINGS_FILE, defaults, env};

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub api: ApiSettings,
    pub routes: RouteSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub timeout_in_millis: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_in_millis.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteSettings {
    pub login_path: String,
    pub home_path: String,
    pub messages_path: String,
}

impl RouteSettings {
    /// Location of a group's message view.
    pub fn group_messages(&self, group_id: &str) -> String {
        format!("{}/{}", self.messages_path.trim_end_matches('/'), group_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub path: PathBuf,
}

impl ClientSettings {
    /// Defaults, then `config/client.json` if present, then `FLM__*`
    /// environment variables. `FLM_API_URL` wins over everything for the
    /// base address.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
                    .separator(env::SETTINGS_ENV_SEPARATOR),
            )
            .set_override_option("api.base_url", std::env::var(env::API_URL_ENV_VAR).ok())?;

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.base_url", defaults::API_BASE_URL)?
            .set_default("routes.login_path", defaults::LOGIN_PATH)?
            .set_default("routes.home_path", defaults::HOME_PATH)?
            .set_default("routes.messages_path", defaults::MESSAGES_PATH)?
            .set_default("storage.path", defaults::STORAGE_PATH)
    }

    /// Settings pointing at `base_url`, everything else at its default.
    pub fn for_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::defaults()?
            .set_override("api.base_url", base_url.into())?
            .build()?
            .try_deserialize()
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: defaults::API_BASE_URL.to_string(),
                timeout_in_millis: None,
            },
            routes: RouteSettings {
                login_path: defaults::LOGIN_PATH.to_string(),
                home_path: defaults::HOME_PATH.to_string(),
                messages_path: defaults::MESSAGES_PATH.to_string(),
            },
            storage: StorageSettings {
                path: PathBuf::from(defaults::STORAGE_PATH),
            },
        }
    }
}

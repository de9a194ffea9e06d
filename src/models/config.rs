//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{EventId, TypeConstraintError};
use crate::i18n::Locale;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the event API, e.g. `http://localhost:3333`.
    #[validate(url)]
    pub api_base_url: String,
    /// Event whose attendees are listed.
    pub event_id: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    /// Layers `{config_dir}/default`, the optional `{config_dir}/{app_env}`
    /// profile and `environment`, later sources winning.
    pub fn load(
        config_dir: &str,
        app_env: &str,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")))
            .add_source(File::with_name(&format!("{config_dir}/{app_env}")).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn event_id(&self) -> Result<EventId, TypeConstraintError> {
        self.event_id.parse()
    }
}

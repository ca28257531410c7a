//! Configuration model loaded from external sources.

use std::env;

use actix_web::cookie::Key;
use config::{Config, ConfigError};
use serde::Deserialize;

/// Minimum secret length accepted for signing session and flash cookies.
pub const MIN_SECRET_LEN: usize = 64;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the HTTP server and its handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the JSON backend, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    pub templates_dir: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub cookie_secure: bool,
}

fn default_api_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    /// Reads `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile and `APP_*` variables, in that order. `API_BASE_URL` and
    /// `SECRET_KEY` take precedence over everything else.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        let mut builder = Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"));

        if let Ok(url) = env::var("API_BASE_URL") {
            builder = builder.set_override("api_base_url", url)?;
        }
        if let Ok(secret) = env::var("SECRET_KEY") {
            builder = builder.set_override("secret", secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Derives the cookie signing key. An empty secret yields a random key
    /// that only lives as long as the process.
    pub fn session_key(&self) -> std::io::Result<Key> {
        if self.secret.is_empty() {
            log::warn!("No secret configured; sessions will not survive a restart");
            return Ok(Key::generate());
        }
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(std::io::Error::other(format!(
                "Secret must be at least {MIN_SECRET_LEN} bytes long"
            )));
        }
        Key::try_from(self.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))
    }
}

//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::constants::*;
use crate::error::SharedError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub client: ClientSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Front-end origin allowed by CORS.
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Extra attempts after a transport failure. HTTP error statuses are never retried.
    pub retry_attempts: u32,
    /// JSON file backing the persisted login flag.
    pub state_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub filter: String,
    pub json: bool,
    pub log_dir: Option<String>,
}

impl AppConfig {
    /// Loads `.env`, built-in defaults, `config/default`, `config/{APP_ENV}` and
    /// `PORTAL__*` environment variables, later sources winning.
    pub fn load() -> Result<Self, SharedError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        let config = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Builder pre-populated with every default, ready for extra sources.
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, SharedError> {
        Ok(Config::builder()
            .set_default("server.host", DEFAULT_SERVER_HOST)?
            .set_default("server.port", i64::from(DEFAULT_SERVER_PORT))?
            .set_default("server.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("server.allowed_origin", DEFAULT_ALLOWED_ORIGIN)?
            .set_default("client.base_url", DEFAULT_CLIENT_BASE_URL)?
            .set_default("client.timeout_ms", DEFAULT_CLIENT_TIMEOUT_MS as i64)?
            .set_default("client.retry_attempts", i64::from(DEFAULT_CLIENT_RETRY_ATTEMPTS))?
            .set_default("client.state_file", DEFAULT_STATE_FILE)?
            .set_default("telemetry.filter", DEFAULT_LOG_FILTER)?
            .set_default("telemetry.json", false)?)
    }
}

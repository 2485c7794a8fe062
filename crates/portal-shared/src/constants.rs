//! Application-wide constants

pub const DEFAULT_APP_ENV: &str = "development";
pub const ENV_PREFIX: &str = "PORTAL";

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3001;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub const DEFAULT_CLIENT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_CLIENT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CLIENT_RETRY_ATTEMPTS: u32 = 1;
pub const DEFAULT_STATE_FILE: &str = ".portal/storage.json";

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_FILE_PREFIX: &str = "portal.log";

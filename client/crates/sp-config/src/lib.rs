mod api_config;
mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MAX_API_TIMEOUT_SECS: u64 = 300;
const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const CONFIG_DIR_ENV: &str = "SP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".smart-pantry";
const CONFIG_FILENAME: &str = "config.toml";

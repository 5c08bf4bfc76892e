use crate::api_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL};

use serde::Deserialize;

/// Identity provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub base_url: String,
    /// Provider API key (secret - never logged)
    pub api_key: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::identity(format!(
                "identity.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::identity(
                "identity.api_key must not be empty when set",
            ));
        }

        Ok(())
    }
}

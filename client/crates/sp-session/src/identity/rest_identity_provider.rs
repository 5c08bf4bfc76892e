use crate::identity::{
    IdentityProvider,
    error::{IdentityError, Result as IdentityResult},
};

use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::{Deserialize, Serialize};
use sp_config::IdentityConfig;
use sp_core::Identity;

const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

/// Identity provider speaking the password sign-in REST exchange.
///
/// The active identity is held in memory only.
pub struct RestIdentityProvider {
    pub base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
    session: RwLock<Option<Identity>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

impl RestIdentityProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `base_url` - Provider URL (e.g., "https://identitytoolkit.googleapis.com")
    /// * `api_key` - Optional API key appended as the `key` query parameter
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client: ReqwestClient::new(),
            session: RwLock::new(None),
        }
    }

    pub fn from_config(config: &IdentityConfig) -> Self {
        Self::new(&config.base_url, config.api_key.as_deref())
    }

    fn sign_in_url(&self) -> String {
        match &self.api_key {
            Some(key) => format!("{}{}?key={}", self.base_url, SIGN_IN_PATH, key),
            None => format!("{}{}", self.base_url, SIGN_IN_PATH),
        }
    }

    fn set_session(&self, identity: Option<Identity>) {
        match self.session.write() {
            Ok(mut session) => *session = identity,
            Err(poisoned) => *poisoned.into_inner() = identity,
        }
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        let body = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self.client.post(self.sign_in_url()).json(&body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ProviderErrorBody>(&bytes)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("provider returned {status}"));

            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    IdentityError::invalid_credentials(message)
                }
                _ => IdentityError::unavailable(message),
            });
        }

        let parsed: SignInResponse = serde_json::from_slice(&bytes)
            .map_err(|e| IdentityError::unavailable(format!("malformed sign-in response: {e}")))?;

        let email = if parsed.email.is_empty() {
            email.to_string()
        } else {
            parsed.email
        };
        let identity = Identity::new(parsed.local_id, email)
            .map_err(|e| IdentityError::unavailable(e.to_string()))?;

        debug!("Provider accepted credentials for {}", identity.id());
        self.set_session(Some(identity.clone()));
        Ok(identity)
    }

    fn current_identity(&self) -> Option<Identity> {
        match self.session.read() {
            Ok(session) => session.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn sign_out(&self) {
        self.set_session(None);
    }
}

use crate::transport::{
    ProfileTransport,
    error::{Result as TransportResult, TransportError},
    wire::{UpdateUserResponse, UserRequest, UserResponse},
};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use sp_config::ApiConfig;
use sp_core::{Goals, Identity, Profile, ProfileDto};

const GET_USER_DATA_PATH: &str = "/get-user-data";
const UPDATE_USER_PATH: &str = "/update-user";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the profile service
pub struct HttpProfileTransport {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpProfileTransport {
    /// Create a new transport
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://127.0.0.1:5001")
    /// * `timeout` - Optional per-request timeout; expiry surfaces as `NetworkError`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> TransportResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &ApiConfig) -> TransportResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    /// POST a JSON body and decode the JSON response, classifying failures
    async fn post<B, R>(&self, path: &str, body: &B) -> TransportResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(TransportError::not_found(format!("{url} returned 404")));
        }

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let excerpt: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(TransportError::server_error(
                status.as_u16(),
                format!("{url} returned {status}: {excerpt}"),
            ));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ProfileTransport for HttpProfileTransport {
    async fn fetch_profile(&self, identity: &Identity) -> TransportResult<Profile> {
        let request = UserRequest {
            uid: identity.id(),
            email: identity.email(),
        };

        let response: UserResponse = self.post(GET_USER_DATA_PATH, &request).await?;
        debug!("get-user-data status: '{}'", response.status);

        let Some(dto) = response.user_data else {
            return Err(TransportError::not_found(format!(
                "no profile stored for {}",
                identity.id()
            )));
        };

        if !dto.uid.is_empty() && dto.uid != identity.id() {
            warn!(
                "Profile service answered for uid '{}' when asked for '{}'; keeping requested identity",
                dto.uid,
                identity.id()
            );
        }

        Ok(dto.into_profile(identity.clone()))
    }

    async fn submit_edit(&self, profile: &Profile) -> TransportResult<Goals> {
        let body = ProfileDto::from(profile);

        let response: UpdateUserResponse = self.post(UPDATE_USER_PATH, &body).await?;
        debug!(
            "update-user status: '{}', daily_kcal={}",
            response.status, response.daily_kcal
        );

        Ok(Goals::new(response.daily_kcal, response.macros))
    }
}

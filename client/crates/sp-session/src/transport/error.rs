use crate::FailureKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors at the profile service boundary.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Profile not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server error: {message} {location}")]
    ServerError {
        /// HTTP status, absent when a 2xx body could not be decoded
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    NetworkError {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::ServerError { .. } => FailureKind::ServerError,
            Self::NetworkError { .. } => FailureKind::NetworkError,
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Non-2xx response
    #[track_caller]
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status: Some(status),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// 2xx response whose body could not be decoded
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::ServerError {
            status: None,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        TransportError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        TransportError::malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;

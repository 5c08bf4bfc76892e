use sp_config::ConfigError;
use sp_session::{SessionError, TransportError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that end a CLI invocation
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Sign-in failed: {source}")]
    SignIn {
        #[source]
        source: SessionError,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Cannot build profile client: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },

    #[error("Missing credentials: {message} {location}")]
    MissingCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON output error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn missing_credentials(message: impl Into<String>) -> Self {
        CliError::MissingCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn sign_in(source: SessionError) -> Self {
        CliError::SignIn { source }
    }

    /// Recovery hint for the user, when the failure has one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::SignIn {
                source: SessionError::Identity(e),
            } => Some(e.recovery_hint()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors at the identity provider boundary.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unavailable: {message} {location}")]
    IdentityUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Whether retrying the same credentials later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::IdentityUnavailable { .. })
    }

    /// User-facing hint shown next to the sign-in form.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "Check your email and password and try again.",
            Self::IdentityUnavailable { .. } => {
                "Unable to reach the sign-in service. \
                   Check your connection and try again."
            }
        }
    }

    /// Creates InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates IdentityUnavailable error at caller location.
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::IdentityUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::unavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;

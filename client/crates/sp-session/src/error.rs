use crate::IdentityError;

use std::panic::Location;

use error_location::ErrorLocation;
use sp_core::PendingOperation;
use thiserror::Error;

/// Rejections of presentation-layer intents.
///
/// Transport failures never appear here: they are absorbed by the reconciler
/// and surfaced as [`FailureNotice`](crate::FailureNotice)s.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("Already signed in {location}")]
    AlreadySignedIn { location: ErrorLocation },

    #[error("Profile not ready (session is {state}) {location}")]
    NotReady {
        state: &'static str,
        location: ErrorLocation,
    },

    #[error("No edit in progress (session is {state}) {location}")]
    NotEditing {
        state: &'static str,
        location: ErrorLocation,
    },

    #[error("Operation already in flight: {operation} {location}")]
    OperationInFlight {
        operation: PendingOperation,
        location: ErrorLocation,
    },

    #[error("Session reconciler has stopped {location}")]
    ReconcilerStopped { location: ErrorLocation },
}

impl SessionError {
    #[track_caller]
    pub fn already_signed_in() -> Self {
        Self::AlreadySignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_ready(state: &'static str) -> Self {
        Self::NotReady {
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_editing(state: &'static str) -> Self {
        Self::NotEditing {
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn operation_in_flight(operation: PendingOperation) -> Self {
        Self::OperationInFlight {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn reconciler_stopped() -> Self {
        Self::ReconcilerStopped {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

//! Session bootstrap and profile reconciliation.
//!
//! [`IdentityGateway`] confirms who the user is, [`ProfileTransport`] talks to
//! the profile service, [`ProfileReconciler`] owns the single
//! [`SessionState`](sp_core::SessionState) and every failure-path decision, and
//! [`SessionPresenter`] is the handle the presentation layer holds.

pub mod error;
pub mod identity;
pub mod presenter;
pub mod reconciler;
pub mod transport;

#[cfg(test)]
mod tests;

pub use error::{Result as SessionResult, SessionError};
pub use identity::{
    IdentityGateway, IdentityProvider,
    error::{IdentityError, Result as IdentityResult},
    rest_identity_provider::RestIdentityProvider,
};
pub use presenter::SessionPresenter;
pub use reconciler::{
    ProfileReconciler,
    failure_notice::{FailureKind, FailureNotice},
};
pub use transport::{
    ProfileTransport,
    error::{Result as TransportResult, TransportError},
    http_profile_transport::HttpProfileTransport,
};

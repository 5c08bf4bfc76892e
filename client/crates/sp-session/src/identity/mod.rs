pub mod error;
pub mod rest_identity_provider;

use crate::identity::error::{IdentityError, Result as IdentityResult};

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use sp_core::Identity;

/// An identity provider that accepts email/password and tracks the active session.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate and record the active session.
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Identity>;

    /// The active session, if any. Must not touch the network.
    fn current_identity(&self) -> Option<Identity>;

    /// Forget the active session.
    fn sign_out(&self);
}

/// Front door to the identity provider used by the reconciler.
#[derive(Clone)]
pub struct IdentityGateway {
    provider: Arc<dyn IdentityProvider>,
}

impl IdentityGateway {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Sign in with email and password.
    ///
    /// Blank credentials are rejected without contacting the provider.
    pub async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(IdentityError::invalid_credentials(
                "email and password are required",
            ));
        }

        match self.provider.sign_in(email.trim(), password).await {
            Ok(identity) => {
                info!("Signed in as {}", identity.id());
                Ok(identity)
            }
            Err(e) if e.is_transient() => {
                warn!("Identity provider unavailable: {e}");
                Err(e)
            }
            Err(e) => {
                info!("Sign-in rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.provider.current_identity()
    }

    pub fn sign_out(&self) {
        self.provider.sign_out();
        info!("Signed out");
    }
}

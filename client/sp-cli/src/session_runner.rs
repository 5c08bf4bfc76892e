use crate::error::{CliError, Result as CliResult};

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;
use sp_config::Config;
use sp_core::{DraftField, FieldUpdate, Profile};
use sp_session::{
    FailureNotice, HttpProfileTransport, IdentityGateway, ProfileReconciler, ProfileTransport,
    RestIdentityProvider, SessionPresenter,
};

/// Result of an edit-and-commit round
#[derive(Debug, Serialize)]
pub struct EditOutcome {
    pub profile: Profile,
    /// Fields whose raw value did not parse and were left unchanged
    pub retained: Vec<DraftField>,
    pub notices: Vec<FailureNotice>,
}

/// Drives one session from sign-in to sign-out for a single command
pub struct SessionRunner {
    presenter: SessionPresenter,
}

impl SessionRunner {
    pub fn new(gateway: IdentityGateway, transport: Arc<dyn ProfileTransport>) -> Self {
        Self {
            presenter: ProfileReconciler::spawn(gateway, transport),
        }
    }

    pub fn from_config(config: &Config) -> CliResult<Self> {
        let provider = RestIdentityProvider::from_config(&config.identity);
        let transport = HttpProfileTransport::from_config(&config.api)?;
        Ok(Self::new(
            IdentityGateway::new(Arc::new(provider)),
            Arc::new(transport),
        ))
    }

    /// Sign in and wait for the bootstrap to settle.
    ///
    /// A failed fetch still yields a (fallback) profile; the failure is
    /// available from [`drain_notices`](Self::drain_notices).
    pub async fn sign_in(&mut self, email: &str, password: &str) -> CliResult<Profile> {
        self.presenter
            .sign_in(email, password)
            .await
            .map_err(CliError::sign_in)?;
        Ok(self.presenter.wait_until_ready().await?)
    }

    /// Apply `edits` to a fresh draft, submit it and wait for the merge.
    pub async fn edit(&mut self, edits: &[(DraftField, String)]) -> CliResult<EditOutcome> {
        self.presenter.begin_edit().await?;

        let mut retained = Vec::new();
        for (field, raw) in edits {
            if self.presenter.update_draft_field(*field, raw).await? == FieldUpdate::Retained {
                debug!("Ignoring {field}: '{raw}' is not a valid number");
                retained.push(*field);
            }
        }

        self.presenter.commit_edit().await?;
        let profile = self.presenter.wait_until_ready().await?;
        info!("Edit round finished for {}", profile.identity().id());

        Ok(EditOutcome {
            profile,
            retained,
            notices: self.presenter.drain_notices(),
        })
    }

    pub fn drain_notices(&mut self) -> Vec<FailureNotice> {
        self.presenter.drain_notices()
    }

    pub async fn sign_out(mut self) -> CliResult<()> {
        Ok(self.presenter.sign_out().await?)
    }
}

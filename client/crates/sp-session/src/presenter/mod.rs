use crate::reconciler::command::Command;
use crate::{FailureNotice, SessionError, SessionResult};

use sp_core::{DraftField, FieldUpdate, Identity, Profile, Route, SessionSnapshot, SessionState};
use tokio::sync::{mpsc, oneshot, watch};

/// Handle the presentation layer holds onto.
///
/// Exposes read-only snapshots of the session, forwards intents to the
/// reconciler, and collects failure notices. Dropping it stops the reconciler.
pub struct SessionPresenter {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
    notices: mpsc::UnboundedReceiver<FailureNotice>,
    route: Route,
}

impl SessionPresenter {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        snapshots: watch::Receiver<SessionSnapshot>,
        notices: mpsc::UnboundedReceiver<FailureNotice>,
    ) -> Self {
        Self {
            commands,
            snapshots,
            notices,
            route: Route::default(),
        }
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn state(&self) -> SessionState {
        self.snapshots.borrow().state.clone()
    }

    /// Profile to render: the draft while editing.
    pub fn profile(&self) -> Option<Profile> {
        self.snapshots.borrow().state.profile().cloned()
    }

    pub fn is_editing(&self) -> bool {
        self.snapshots.borrow().state.is_editing()
    }

    /// Whether a fetch or submit is outstanding.
    pub fn is_busy(&self) -> bool {
        self.snapshots.borrow().is_busy()
    }

    /// Wait for the next published snapshot.
    pub async fn changed(&mut self) -> SessionResult<SessionSnapshot> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| SessionError::reconciler_stopped())?;
        Ok(self.snapshots.borrow_and_update().clone())
    }

    /// Wait until a snapshot satisfies `predicate` (checks the current one first).
    pub async fn wait_until(
        &mut self,
        predicate: impl FnMut(&SessionSnapshot) -> bool,
    ) -> SessionResult<SessionSnapshot> {
        let snapshot = self
            .snapshots
            .wait_for(predicate)
            .await
            .map_err(|_| SessionError::reconciler_stopped())?;
        Ok(snapshot.clone())
    }

    /// Wait until the session settles in `Ready` with nothing in flight.
    pub async fn wait_until_ready(&mut self) -> SessionResult<Profile> {
        let snapshot = self
            .wait_until(|s| s.state.is_ready() && !s.is_busy())
            .await?;
        snapshot
            .state
            .profile()
            .cloned()
            .ok_or_else(|| SessionError::not_ready(snapshot.state.name()))
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Sign in and start bootstrapping. Returns once the identity is confirmed;
    /// the profile arrives in a later snapshot.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<Identity> {
        self.request(|reply| Command::SignIn {
            email: email.to_string(),
            password: password.to_string(),
            reply,
        })
        .await?
    }

    /// Bootstrap from a session the identity provider already holds.
    pub async fn resume(&self) -> SessionResult<Option<Identity>> {
        self.request(|reply| Command::Resume { reply }).await
    }

    pub async fn begin_edit(&self) -> SessionResult<()> {
        self.request(|reply| Command::BeginEdit { reply }).await?
    }

    pub async fn update_draft_field(
        &self,
        field: DraftField,
        raw_value: &str,
    ) -> SessionResult<FieldUpdate> {
        self.request(|reply| Command::UpdateDraftField {
            field,
            raw: raw_value.to_string(),
            reply,
        })
        .await?
    }

    /// Submit the draft. Returns once the submission is dispatched; the merged
    /// profile arrives in a later snapshot.
    pub async fn commit_edit(&self) -> SessionResult<()> {
        self.request(|reply| Command::CommitEdit { reply }).await?
    }

    pub async fn sign_out(&mut self) -> SessionResult<()> {
        self.request(|reply| Command::SignOut { reply }).await?;
        self.route = Route::default();
        Ok(())
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> SessionResult<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| SessionError::reconciler_stopped())?;
        response
            .await
            .map_err(|_| SessionError::reconciler_stopped())
    }

    // =========================================================================
    // Failure notices
    // =========================================================================

    pub fn try_next_notice(&mut self) -> Option<FailureNotice> {
        self.notices.try_recv().ok()
    }

    /// Wait for the next notice; `None` once the reconciler has stopped.
    pub async fn next_notice(&mut self) -> Option<FailureNotice> {
        self.notices.recv().await
    }

    pub fn drain_notices(&mut self) -> Vec<FailureNotice> {
        std::iter::from_fn(|| self.notices.try_recv().ok()).collect()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn current_route(&self) -> Route {
        self.route
    }

    /// Select a destination; returns `false` when it is already selected.
    pub fn select_route(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        self.route = route;
        true
    }
}

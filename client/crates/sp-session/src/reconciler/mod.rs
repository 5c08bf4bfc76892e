pub(crate) mod command;
pub mod failure_notice;
pub mod transitions;

use crate::reconciler::command::Command;
use crate::{
    FailureNotice, IdentityGateway, ProfileTransport, SessionError, SessionPresenter,
    SessionResult, TransportError, TransportResult,
};

use std::sync::Arc;

use log::{debug, info, warn};
use sp_core::{
    DraftField, FieldUpdate, Goals, Identity, PendingOperation, Profile, SessionSnapshot,
    SessionState,
};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};

const COMMAND_BUFFER_SIZE: usize = 32;

/// Result of a remote operation, delivered back to the reconciler task.
enum Completion {
    Fetched {
        identity: Identity,
        result: TransportResult<Profile>,
    },
    Submitted {
        draft: Profile,
        result: TransportResult<Goals>,
    },
}

/// The single remote operation a session may have outstanding.
struct InFlight {
    epoch: u64,
    operation: PendingOperation,
    task: JoinHandle<Completion>,
}

/// Owner of the session state machine.
///
/// Runs as one tokio task; intents arrive serialized over a channel and
/// remote calls run as separate tasks whose completions are consumed here.
/// Sign-out aborts the outstanding call and bumps `epoch`, so a late
/// completion can never touch a newer session.
pub struct ProfileReconciler {
    gateway: IdentityGateway,
    transport: Arc<dyn ProfileTransport>,
    state: SessionState,
    epoch: u64,
    in_flight: Option<InFlight>,
    snapshots: watch::Sender<SessionSnapshot>,
    notices: mpsc::UnboundedSender<FailureNotice>,
}

impl ProfileReconciler {
    /// Start the reconciler task and return the presenter that drives it.
    ///
    /// The task stops when the presenter is dropped.
    pub fn spawn(
        gateway: IdentityGateway,
        transport: Arc<dyn ProfileTransport>,
    ) -> SessionPresenter {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER_SIZE);
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::default());
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();

        let reconciler = Self {
            gateway,
            transport,
            state: SessionState::Unauthenticated,
            epoch: 0,
            in_flight: None,
            snapshots: snapshot_tx,
            notices: notice_tx,
        };
        tokio::spawn(reconciler.run(command_rx));

        SessionPresenter::new(command_tx, snapshot_rx, notice_rx)
    }

    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        loop {
            tokio::select! {
                biased;

                joined = wait_for_completion(&mut self.in_flight), if self.in_flight.is_some() => {
                    if let Some(in_flight) = self.in_flight.take() {
                        self.on_completion(in_flight.epoch, joined);
                    }
                }

                command = commands.recv() => match command {
                    Some(command) => self.handle(command).await,
                    None => break,
                },
            }
        }

        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
        debug!("Session reconciler stopped");
    }

    async fn handle(&mut self, command: Command) {
        debug!("Handling {} in state {}", command.name(), self.state);

        match command {
            Command::SignIn {
                email,
                password,
                reply,
            } => {
                let result = self.sign_in(&email, &password).await;
                let _ = reply.send(result);
            }
            Command::Resume { reply } => {
                let _ = reply.send(self.resume());
            }
            Command::BeginEdit { reply } => {
                let _ = reply.send(self.begin_edit());
            }
            Command::UpdateDraftField { field, raw, reply } => {
                let _ = reply.send(self.update_draft_field(field, &raw));
            }
            Command::CommitEdit { reply } => {
                let _ = reply.send(self.commit_edit());
            }
            Command::SignOut { reply } => {
                self.sign_out();
                let _ = reply.send(());
            }
        }
    }

    async fn sign_in(&mut self, email: &str, password: &str) -> SessionResult<Identity> {
        if self.state.is_authenticated() {
            return Err(SessionError::already_signed_in());
        }

        let identity = self.gateway.sign_in(email, password).await?;
        self.start_bootstrap(identity.clone());
        Ok(identity)
    }

    /// Pick up a session the provider already holds (e.g. after relaunch).
    fn resume(&mut self) -> Option<Identity> {
        if self.state.is_authenticated() {
            return self.state.identity().cloned();
        }

        let identity = self.gateway.current_identity()?;
        info!("Resuming existing session for {}", identity.id());
        self.start_bootstrap(identity.clone());
        Some(identity)
    }

    fn begin_edit(&mut self) -> SessionResult<()> {
        let next = transitions::begin_edit(&self.state)?;
        self.ensure_idle()?;

        if let Some(next) = next {
            info!("Editing profile");
            self.state = next;
            self.publish();
        }
        Ok(())
    }

    fn update_draft_field(&mut self, field: DraftField, raw: &str) -> SessionResult<FieldUpdate> {
        if !self.state.is_editing() {
            return Err(SessionError::not_editing(self.state.name()));
        }
        self.ensure_idle()?;

        let update = transitions::update_draft(&mut self.state, field, raw)?;
        match update {
            FieldUpdate::Applied => self.publish(),
            FieldUpdate::Retained => debug!("Ignored non-numeric input for {field}"),
        }
        Ok(update)
    }

    fn commit_edit(&mut self) -> SessionResult<()> {
        let SessionState::Editing { draft, .. } = &self.state else {
            return Err(SessionError::not_editing(self.state.name()));
        };
        self.ensure_idle()?;

        let draft = draft.clone();
        let transport = Arc::clone(&self.transport);
        info!("Submitting profile edit for {}", draft.identity().id());

        self.track(
            PendingOperation::SubmitEdit,
            tokio::spawn(async move {
                let result = transport.submit_edit(&draft).await;
                Completion::Submitted { draft, result }
            }),
        );
        Ok(())
    }

    fn sign_out(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!("Abandoning in-flight {}", in_flight.operation);
            in_flight.task.abort();
        }

        self.epoch += 1;
        self.gateway.sign_out();
        self.state = SessionState::Unauthenticated;
        self.publish();
    }

    fn start_bootstrap(&mut self, identity: Identity) {
        self.epoch += 1;
        self.state = SessionState::Bootstrapping {
            identity: identity.clone(),
        };

        let transport = Arc::clone(&self.transport);
        self.track(
            PendingOperation::FetchProfile,
            tokio::spawn(async move {
                let result = transport.fetch_profile(&identity).await;
                Completion::Fetched { identity, result }
            }),
        );
    }

    fn track(&mut self, operation: PendingOperation, task: JoinHandle<Completion>) {
        self.in_flight = Some(InFlight {
            epoch: self.epoch,
            operation,
            task,
        });
        self.publish();
    }

    fn ensure_idle(&self) -> SessionResult<()> {
        match &self.in_flight {
            Some(in_flight) => Err(SessionError::operation_in_flight(in_flight.operation)),
            None => Ok(()),
        }
    }

    fn on_completion(&mut self, epoch: u64, joined: Result<Completion, JoinError>) {
        if epoch != self.epoch {
            debug!("Discarding completion from stale session epoch {epoch}");
            return;
        }

        let completion = match joined {
            Ok(completion) => completion,
            Err(e) => match self.completion_for_failed_task(&e) {
                Some(completion) => completion,
                None => return,
            },
        };

        match completion {
            Completion::Fetched { identity, result } => self.finish_bootstrap(identity, result),
            Completion::Submitted { draft, result } => self.finish_commit(draft, result),
        }
        self.publish();
    }

    fn finish_bootstrap(&mut self, identity: Identity, result: TransportResult<Profile>) {
        match &self.state {
            SessionState::Bootstrapping { identity: current } if *current == identity => {}
            other => {
                debug!("Ignoring profile fetch completion in state {other}");
                return;
            }
        }

        let (profile, failure) = transitions::complete_bootstrap(identity, result);
        match failure {
            None => info!(
                "Profile loaded for {} (setup complete: {})",
                profile.identity().id(),
                profile.biometrics.is_setup_complete()
            ),
            Some(e) => {
                warn!(
                    "Profile fetch failed for {}, continuing with fallback profile: {e}",
                    profile.identity().id()
                );
                self.notify(PendingOperation::FetchProfile, &e);
            }
        }

        self.state = SessionState::Ready { profile };
    }

    fn finish_commit(&mut self, draft: Profile, result: TransportResult<Goals>) {
        let SessionState::Editing { last_synced, .. } = &self.state else {
            debug!("Ignoring profile submit completion in state {}", self.state);
            return;
        };

        let (profile, failure) = transitions::complete_commit(draft, last_synced, result);
        match failure {
            None => info!(
                "Profile edit saved; daily goal now {} kcal",
                profile.goals().daily_kcal
            ),
            Some(e) => {
                warn!("Profile edit not saved, keeping local changes: {e}");
                self.notify(PendingOperation::SubmitEdit, &e);
            }
        }

        self.state = SessionState::Ready { profile };
    }

    /// A remote task panicked: treat it as a network failure of that operation.
    fn completion_for_failed_task(&self, e: &JoinError) -> Option<Completion> {
        let error = || TransportError::network(format!("remote task failed: {e}"));
        match &self.state {
            SessionState::Bootstrapping { identity } => Some(Completion::Fetched {
                identity: identity.clone(),
                result: Err(error()),
            }),
            SessionState::Editing { draft, .. } => Some(Completion::Submitted {
                draft: draft.clone(),
                result: Err(error()),
            }),
            _ => None,
        }
    }

    fn notify(&self, operation: PendingOperation, error: &TransportError) {
        let _ = self.notices.send(FailureNotice {
            operation,
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    fn publish(&self) {
        self.snapshots.send_replace(SessionSnapshot {
            state: self.state.clone(),
            pending: self.in_flight.as_ref().map(|f| f.operation),
        });
    }
}

async fn wait_for_completion(in_flight: &mut Option<InFlight>) -> Result<Completion, JoinError> {
    match in_flight {
        Some(in_flight) => (&mut in_flight.task).await,
        None => std::future::pending().await,
    }
}

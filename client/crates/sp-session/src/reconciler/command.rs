use crate::SessionResult;

use sp_core::{DraftField, FieldUpdate, Identity};
use tokio::sync::oneshot;

/// Intents forwarded from the presenter to the reconciler task.
///
/// Not `Debug`: `SignIn` carries a password.
pub(crate) enum Command {
    SignIn {
        email: String,
        password: String,
        reply: oneshot::Sender<SessionResult<Identity>>,
    },
    Resume {
        reply: oneshot::Sender<Option<Identity>>,
    },
    BeginEdit {
        reply: oneshot::Sender<SessionResult<()>>,
    },
    UpdateDraftField {
        field: DraftField,
        raw: String,
        reply: oneshot::Sender<SessionResult<FieldUpdate>>,
    },
    CommitEdit {
        reply: oneshot::Sender<SessionResult<()>>,
    },
    SignOut {
        reply: oneshot::Sender<()>,
    },
}

impl Command {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::SignIn { .. } => "sign_in",
            Self::Resume { .. } => "resume",
            Self::BeginEdit { .. } => "begin_edit",
            Self::UpdateDraftField { .. } => "update_draft_field",
            Self::CommitEdit { .. } => "commit_edit",
            Self::SignOut { .. } => "sign_out",
        }
    }
}

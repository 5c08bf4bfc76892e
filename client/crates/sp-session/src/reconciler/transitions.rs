//! Pure state transitions. The reconciler task sequences these; nothing here
//! performs I/O.

use crate::{SessionError, SessionResult, TransportError, TransportResult};

use sp_core::{DraftField, FieldUpdate, Goals, Identity, Profile, SessionState};

/// `Bootstrapping -> Ready`: any fetch failure yields the fallback profile.
pub fn complete_bootstrap(
    identity: Identity,
    result: TransportResult<Profile>,
) -> (Profile, Option<TransportError>) {
    match result {
        Ok(profile) => (profile, None),
        Err(e) => (Profile::fallback(identity), Some(e)),
    }
}

/// `Ready -> Editing`. Returns `None` when already editing (no-op).
pub fn begin_edit(state: &SessionState) -> SessionResult<Option<SessionState>> {
    match state {
        SessionState::Ready { profile } => Ok(Some(SessionState::Editing {
            draft: profile.clone(),
            last_synced: profile.clone(),
        })),
        SessionState::Editing { .. } => Ok(None),
        other => Err(SessionError::not_ready(other.name())),
    }
}

/// `Editing -> Editing`: write one raw value into the draft.
pub fn update_draft(
    state: &mut SessionState,
    field: DraftField,
    raw: &str,
) -> SessionResult<FieldUpdate> {
    match state {
        SessionState::Editing { draft, .. } => Ok(draft.apply_draft_field(field, raw)),
        other => Err(SessionError::not_editing(other.name())),
    }
}

/// `Editing -> Ready`: merge the submitted draft with the server's answer.
///
/// On success only the goals change. On failure the draft is kept and the
/// goals stay as last synced.
pub fn complete_commit(
    submitted: Profile,
    last_synced: &Profile,
    result: TransportResult<Goals>,
) -> (Profile, Option<TransportError>) {
    match result {
        Ok(goals) => (submitted.with_goals(goals), None),
        Err(e) => (submitted.with_goals(last_synced.goals().clone()), Some(e)),
    }
}


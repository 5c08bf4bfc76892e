use crate::{Identity, Profile};

use serde::Serialize;

/// Lifecycle of the single client session.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Initial state, and the state after sign-out
    #[default]
    Unauthenticated,
    /// Identity confirmed, profile fetch outstanding
    Bootstrapping { identity: Identity },
    Ready { profile: Profile },
    /// `draft` diverges from `last_synced` in `name` and `biometrics` only
    Editing { draft: Profile, last_synced: Profile },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Bootstrapping { .. } => "bootstrapping",
            Self::Ready { .. } => "ready",
            Self::Editing { .. } => "editing",
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::Bootstrapping { identity } => Some(identity),
            Self::Ready { profile } => Some(profile.identity()),
            Self::Editing { last_synced, .. } => Some(last_synced.identity()),
        }
    }

    /// The profile to display: the synced profile when ready, the draft when editing.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Ready { profile } => Some(profile),
            Self::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

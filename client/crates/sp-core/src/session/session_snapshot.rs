use crate::{PendingOperation, SessionState};

use serde::Serialize;

/// Read-only view of the session published to the presentation layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub pending: Option<PendingOperation>,
}

impl SessionSnapshot {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

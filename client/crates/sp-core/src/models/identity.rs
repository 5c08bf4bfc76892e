use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Authenticated user reference issued by the identity provider.
///
/// Immutable for the lifetime of a session. The `id` is stable and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdentityRecord")]
pub struct Identity {
    id: String,
    email: String,
}

impl Identity {
    /// Create an identity, rejecting a blank `id`.
    #[track_caller]
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> CoreErrorResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::validation("identity id must not be empty"));
        }

        Ok(Self {
            id,
            email: email.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Unvalidated wire shape; deserialization goes through [`Identity::new`].
#[derive(Deserialize)]
struct IdentityRecord {
    id: String,
    #[serde(default)]
    email: String,
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = CoreError;

    fn try_from(record: IdentityRecord) -> CoreErrorResult<Self> {
        Self::new(record.id, record.email)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.id, self.email)
    }
}

use serde::Serialize;

/// Remote operation currently in flight for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingOperation {
    FetchProfile,
    SubmitEdit,
}

impl PendingOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchProfile => "fetch_profile",
            Self::SubmitEdit => "submit_edit",
        }
    }
}

impl std::fmt::Display for PendingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

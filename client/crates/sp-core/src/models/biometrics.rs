use serde::{Deserialize, Serialize};

/// Body measurements the remote service derives goals from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Biometrics {
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    /// `0.0` means the user never completed profile setup
    pub weight_kg: f64,
    pub activity_level: String,
}

impl Biometrics {
    /// Whether the user ever completed setup (`weight_kg` is the sentinel).
    ///
    /// Informational only: the session core never branches on it.
    pub fn is_setup_complete(&self) -> bool {
        self.weight_kg != 0.0
    }
}

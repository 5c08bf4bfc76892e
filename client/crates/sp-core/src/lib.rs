pub mod error;
pub mod models;
pub mod session;

pub use error::{CoreError, Result};
pub use models::biometrics::Biometrics;
pub use models::draft_field::{DraftField, FieldUpdate};
pub use models::goals::Goals;
pub use models::identity::Identity;
pub use models::profile::Profile;
pub use models::profile_dto::{BiometricsDto, GoalsDto, ProfileDto};
pub use models::route::Route;
pub use session::pending_operation::PendingOperation;
pub use session::session_snapshot::SessionSnapshot;
pub use session::session_state::SessionState;

#[cfg(test)]
mod tests;

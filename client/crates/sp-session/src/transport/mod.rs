pub mod error;
pub mod http_profile_transport;
pub(crate) mod wire;

use crate::transport::error::Result as TransportResult;

use async_trait::async_trait;
use sp_core::{Goals, Identity, Profile};

/// Request/response channel to the profile service.
///
/// Implementations never retry; that decision belongs to the reconciler.
#[async_trait]
pub trait ProfileTransport: Send + Sync {
    /// Fetch the profile stored for `identity`.
    ///
    /// The returned profile carries `identity`.
    async fn fetch_profile(&self, identity: &Identity) -> TransportResult<Profile>;

    /// Submit the full profile; the service recomputes and returns the goals.
    async fn submit_edit(&self, profile: &Profile) -> TransportResult<Goals>;
}

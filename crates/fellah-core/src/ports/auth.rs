use crate::profile::{AuthCredentialInput, UserProfile};
use crate::session::AuthError;

/// Authentication capability.
///
/// The built-in simulation accepts any non-empty credentials; a real
/// backend plugs in here without touching the session machine.
#[async_trait::async_trait]
pub trait AuthPort: Send + Sync {
    async fn authenticate(&self, credentials: &AuthCredentialInput)
        -> Result<UserProfile, AuthError>;
}

//! Simulated authentication provider.
//!
//! Pre-backend stub: accepts any credentials after a fixed delay and
//! returns the demo farmer profile. The activation code is not checked
//! here; the session machine already rejected empty input.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use fellah_core::ports::AuthPort;
use fellah_core::profile::{AuthCredentialInput, Subscription, UserProfile};
use fellah_core::session::AuthError;
use fellah_core::AppConfig;

pub struct SimulatedAuth {
    delay: Duration,
}

impl SimulatedAuth {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_millis(config.timing.auth_delay_ms))
    }
}

#[async_trait]
impl AuthPort for SimulatedAuth {
    async fn authenticate(
        &self,
        credentials: &AuthCredentialInput,
    ) -> Result<UserProfile, AuthError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulated login running");
        tokio::time::sleep(self.delay).await;

        Ok(UserProfile {
            id: Uuid::new_v4().to_string(),
            name: "Ahmad Ben Ali".into(),
            phone: credentials.phone_number.clone(),
            location: "Béja, Tunisie".into(),
            farm_size: "5 hectares".into(),
            subscription: Subscription::Free,
        })
    }
}

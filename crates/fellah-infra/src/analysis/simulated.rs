//! Simulated analysis provider.
//!
//! Stands in for a real classifier while the product is pre-backend:
//! waits for the configured delay, then returns the canned verdict. The
//! flow logic upstream is identical for a real provider.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use fellah_core::diagnosis::{AnalysisError, Confidence, DiagnosisResult, ImageHandle};
use fellah_core::ports::AnalysisPort;
use fellah_core::AppConfig;

/// Fake classifier with a fixed delay and optional random jitter.
pub struct SimulatedAnalysis {
    delay: Duration,
    jitter: Duration,
}

impl SimulatedAnalysis {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            jitter: Duration::ZERO,
        }
    }

    /// Adds up to `jitter` of extra random delay per attempt.
    pub fn with_jitter(delay: Duration, jitter: Duration) -> Self {
        Self { delay, jitter }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_millis(config.timing.analysis_delay_ms))
    }

    fn verdict() -> DiagnosisResult {
        DiagnosisResult {
            disease: "Mildiou".into(),
            confidence: Confidence::new(94).expect("canned confidence in range"),
            severity: "Modérée".into(),
            recommendation: "Utilisez un fongicide cuivre".into(),
            treatment: "Appliquez de la bouillie bordelaise".into(),
        }
    }
}

#[async_trait]
impl AnalysisPort for SimulatedAnalysis {
    async fn analyze(&self, image: &ImageHandle) -> Result<DiagnosisResult, AnalysisError> {
        let mut delay = self.delay;
        if !self.jitter.is_zero() {
            let jitter_ms = rand::rng().random_range(0..=self.jitter.as_millis() as u64);
            delay += Duration::from_millis(jitter_ms);
        }
        debug!(image = %image.uri, delay_ms = delay.as_millis() as u64, "simulated analysis running");

        tokio::time::sleep(delay).await;
        Ok(Self::verdict())
    }
}

//! Application dependency grouping and assembly.
//!
//! `AppDeps` is not a builder: it is a plain parameter grouping with no
//! defaults and no hidden logic. The constructor signature is the
//! dependency manifest.

use std::sync::Arc;
use std::time::Duration;

use fellah_core::ports::{
    AnalysisPort, AuthPort, CapturePort, ClockPort, ContentCatalogPort, DiagnosisEventPort,
    SessionEventPort,
};
use fellah_core::AppConfig;

use crate::usecases::{
    DiagnosisOrchestrator, ListMarketQuotes, LoadOnboardingDeck, SessionOrchestrator,
};

/// Application dependency grouping. All dependencies are required.
pub struct AppDeps {
    pub clock: Arc<dyn ClockPort>,
    pub catalog: Arc<dyn ContentCatalogPort>,
    pub capture: Arc<dyn CapturePort>,
    pub analysis: Arc<dyn AnalysisPort>,
    pub auth: Arc<dyn AuthPort>,
    pub session_events: Arc<dyn SessionEventPort>,
    pub diagnosis_events: Arc<dyn DiagnosisEventPort>,
    pub config: AppConfig,
}

/// The assembled application: flow factories and use-case accessors for
/// the shell that hosts the rendering layer.
pub struct App {
    deps: AppDeps,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn config(&self) -> &AppConfig {
        &self.deps.config
    }

    /// Builds the session flow for one launch: loads the onboarding deck
    /// once, then hands out the orchestrator.
    pub async fn session_flow(&self) -> anyhow::Result<Arc<SessionOrchestrator>> {
        let deck = LoadOnboardingDeck::new(Arc::clone(&self.deps.catalog))
            .execute()
            .await?;
        Ok(SessionOrchestrator::new(
            &deck,
            Duration::from_millis(self.deps.config.timing.splash_delay_ms),
            Arc::clone(&self.deps.auth),
            Arc::clone(&self.deps.session_events),
        ))
    }

    /// Builds one diagnosis flow instance.
    pub fn diagnosis_flow(&self) -> Arc<DiagnosisOrchestrator> {
        DiagnosisOrchestrator::new(
            Arc::clone(&self.deps.capture),
            Arc::clone(&self.deps.analysis),
            Arc::clone(&self.deps.diagnosis_events),
            Arc::clone(&self.deps.clock),
            Duration::from_millis(self.deps.config.timing.analysis_timeout_ms),
        )
    }

    pub fn list_market_quotes(&self) -> ListMarketQuotes {
        ListMarketQuotes::new(Arc::clone(&self.deps.catalog))
    }
}

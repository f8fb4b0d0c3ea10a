use crate::diagnosis::{AnalysisError, DiagnosisResult, ImageHandle};

/// Disease analysis capability.
///
/// At most one analysis is in flight per flow instance; the state machine
/// enforces that by dropping captures while one is running. The flow
/// logic is the same whether the provider is the built-in simulation, a
/// local model, or a remote service.
#[async_trait::async_trait]
pub trait AnalysisPort: Send + Sync {
    async fn analyze(&self, image: &ImageHandle) -> Result<DiagnosisResult, AnalysisError>;
}

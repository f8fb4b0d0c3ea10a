use crate::diagnosis::DiagnosisState;

/// Rendering-layer subscription to diagnosis stage changes.
#[async_trait::async_trait]
pub trait DiagnosisEventPort: Send + Sync {
    async fn emit_diagnosis_state_changed(&self, state: DiagnosisState);
}

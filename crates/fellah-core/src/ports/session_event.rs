use crate::session::SessionState;

/// Rendering-layer subscription to session stage changes.
///
/// Emission happens inside the dispatch that produced the change, so the
/// subscriber observes transitions in order and before the next event is
/// processed.
#[async_trait::async_trait]
pub trait SessionEventPort: Send + Sync {
    async fn emit_session_state_changed(&self, state: SessionState);
}

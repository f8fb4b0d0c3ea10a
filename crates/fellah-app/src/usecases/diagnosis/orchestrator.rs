//! Diagnosis flow orchestrator.
//!
//! Coordinates the diagnosis state machine, the capture and analysis
//! providers, and the single in-flight analysis task. The analysis runs
//! as an abortable tokio task under a timeout; teardown cancels it so no
//! transition fires afterwards.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use fellah_core::diagnosis::{
    AnalysisError, CaptureError, CaptureSource, DiagnosisAction, DiagnosisEvent, DiagnosisRequest,
    DiagnosisState, DiagnosisStateMachine,
};
use fellah_core::ports::{AnalysisPort, CapturePort, ClockPort, DiagnosisEventPort};

use crate::usecases::FlowContext;

/// Orchestrator for one diagnosis flow instance:
/// `Idle → Captured → Analyzing → Review → Idle`.
///
/// The analysis task only holds a weak reference back to the flow, so a
/// dropped or shut-down flow never observes a late completion.
pub struct DiagnosisOrchestrator {
    weak_self: Weak<Self>,
    context: Arc<FlowContext<DiagnosisState>>,
    capture: Arc<dyn CapturePort>,
    analysis: Arc<dyn AnalysisPort>,
    events: Arc<dyn DiagnosisEventPort>,
    clock: Arc<dyn ClockPort>,
    analysis_timeout: Duration,
    analysis_task: Mutex<Option<AbortHandle>>,
}

impl DiagnosisOrchestrator {
    pub fn new(
        capture: Arc<dyn CapturePort>,
        analysis: Arc<dyn AnalysisPort>,
        events: Arc<dyn DiagnosisEventPort>,
        clock: Arc<dyn ClockPort>,
        analysis_timeout: Duration,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            weak_self: weak_self.clone(),
            context: FlowContext::new(DiagnosisState::Idle { error: None }).arc(),
            capture,
            analysis,
            events,
            clock,
            analysis_timeout,
            analysis_task: Mutex::new(None),
        })
    }

    /// Runs the capture provider and, on success, starts the analysis.
    ///
    /// On failure the flow stays `Idle`, the error lands in the state for
    /// the rendering layer and is returned to the caller; no timer starts.
    /// A capture while an attempt is already in flight is dropped by the
    /// state machine.
    pub async fn capture(&self, source: CaptureSource) -> Result<DiagnosisState, CaptureError> {
        let image = match self.capture.capture(source).await {
            Ok(image) => image,
            Err(error) => {
                warn!(%error, "capture failed");
                self.dispatch(DiagnosisEvent::CaptureFailed {
                    error: error.clone(),
                })
                .await;
                return Err(error);
            }
        };

        let request = DiagnosisRequest::new(image, source, self.clock.now());
        Ok(self
            .dispatch(DiagnosisEvent::CaptureSucceeded { request })
            .await)
    }

    /// Discards the reviewed attempt (or a surfaced failure) and returns
    /// the flow to a fresh `Idle`.
    pub async fn reset(&self) -> DiagnosisState {
        self.dispatch(DiagnosisEvent::Reset).await
    }

    /// Cancels any in-flight analysis. After this returns, the flow emits
    /// no further transitions on its own.
    pub async fn shutdown(&self) {
        if let Some(task) = self.analysis_task.lock().await.take() {
            task.abort();
            debug!("analysis task canceled");
        }
    }

    pub async fn state(&self) -> DiagnosisState {
        self.context.get_state().await
    }

    async fn dispatch(&self, event: DiagnosisEvent) -> DiagnosisState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("flow.diagnosis.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let (next, actions) = DiagnosisStateMachine::transition(current, event);
                if next != from {
                    info!(from = from.stage(), to = next.stage(), "diagnosis state transition");
                    self.context.set_state(next.clone()).await;
                    self.events.emit_diagnosis_state_changed(next.clone()).await;
                } else if actions.is_empty() {
                    debug!(stage = from.stage(), "event ignored in current stage");
                }
                pending_events.extend(self.execute_actions(actions).await);
                current = next;
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<DiagnosisAction>) -> Vec<DiagnosisEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(action = action.name(), "diagnosis executing action");
            match action {
                DiagnosisAction::StartAnalysis { request } => {
                    self.spawn_analysis(request).await;
                    follow_up_events.push(DiagnosisEvent::AnalysisStarted);
                }
            }
        }
        follow_up_events
    }

    // Boxed to give this future a declared `Send` bound rather than an
    // inferred one. `dispatch → execute_actions → spawn_analysis → spawned
    // task → dispatch` forms a recursive async cycle that the compiler
    // cannot resolve the `Send` auto-trait through; boxing one node breaks
    // the inference cycle without changing behavior.
    fn spawn_analysis<'a>(
        &'a self,
        request: DiagnosisRequest,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let weak = self.weak_self.clone();
            let analysis = Arc::clone(&self.analysis);
            let timeout = self.analysis_timeout;

            let task = tokio::spawn(async move {
                let outcome =
                    match tokio::time::timeout(timeout, analysis.analyze(&request.image)).await {
                        Ok(Ok(result)) => DiagnosisEvent::AnalysisCompleted { result },
                        Ok(Err(error)) => DiagnosisEvent::AnalysisFailed { error },
                        Err(_elapsed) => DiagnosisEvent::AnalysisFailed {
                            error: AnalysisError::Timeout,
                        },
                    };
                if let Some(flow) = weak.upgrade() {
                    flow.dispatch(outcome).await;
                }
            });

            let mut guard = self.analysis_task.lock().await;
            if let Some(previous) = guard.replace(task.abort_handle()) {
                previous.abort();
            }
        })
    }
}

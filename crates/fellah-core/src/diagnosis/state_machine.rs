//! Diagnosis state machine.
//!
//! Pure transitions for the capture → analyze → review lifecycle. The
//! `Captured` stage auto-advances: a successful capture yields the
//! `StartAnalysis` action, whose execution feeds `AnalysisStarted` back in
//! the same dispatch, so no external event is needed between capture and
//! `Analyzing`.

use serde::{Deserialize, Serialize};

use crate::diagnosis::error::{AnalysisError, CaptureError, DiagnosisFailure};
use crate::diagnosis::model::{DiagnosisRequest, DiagnosisResult};

/// Diagnosis flow state.
///
/// État du flux de diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosisState {
    /// No attempt in progress; `error` is the last surfaced failure.
    Idle { error: Option<DiagnosisFailure> },
    /// Image captured, analysis not yet running.
    Captured { request: DiagnosisRequest },
    /// Analysis provider at work on the stored request.
    Analyzing { request: DiagnosisRequest },
    /// Verdict ready for the detail view.
    Review {
        request: DiagnosisRequest,
        result: DiagnosisResult,
    },
}

impl DiagnosisState {
    /// Stable stage key for logging and the rendering layer.
    pub fn stage(&self) -> &'static str {
        match self {
            DiagnosisState::Idle { .. } => "idle",
            DiagnosisState::Captured { .. } => "captured",
            DiagnosisState::Analyzing { .. } => "analyzing",
            DiagnosisState::Review { .. } => "review",
        }
    }
}

/// Events that drive the diagnosis flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosisEvent {
    /// Capture provider produced an image.
    CaptureSucceeded { request: DiagnosisRequest },
    /// Capture provider failed; the flow stays idle.
    CaptureFailed { error: CaptureError },
    /// Analysis task was started for the stored request.
    AnalysisStarted,
    /// Analysis provider produced a verdict.
    AnalysisCompleted { result: DiagnosisResult },
    /// Analysis provider failed or timed out.
    AnalysisFailed { error: AnalysisError },
    /// User discarded the attempt.
    Reset,
}

impl DiagnosisEvent {
    /// Event name without payload, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosisEvent::CaptureSucceeded { .. } => "capture_succeeded",
            DiagnosisEvent::CaptureFailed { .. } => "capture_failed",
            DiagnosisEvent::AnalysisStarted => "analysis_started",
            DiagnosisEvent::AnalysisCompleted { .. } => "analysis_completed",
            DiagnosisEvent::AnalysisFailed { .. } => "analysis_failed",
            DiagnosisEvent::Reset => "reset",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosisAction {
    /// Start one analysis task for the captured request.
    StartAnalysis { request: DiagnosisRequest },
}

impl DiagnosisAction {
    /// Action name without payload, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosisAction::StartAnalysis { .. } => "start_analysis",
        }
    }
}

/// Pure diagnosis state machine.
pub struct DiagnosisStateMachine;

impl DiagnosisStateMachine {
    pub fn transition(
        state: DiagnosisState,
        event: DiagnosisEvent,
    ) -> (DiagnosisState, Vec<DiagnosisAction>) {
        match (state, event) {
            (DiagnosisState::Idle { .. }, DiagnosisEvent::CaptureSucceeded { request }) => (
                DiagnosisState::Captured {
                    request: request.clone(),
                },
                vec![DiagnosisAction::StartAnalysis { request }],
            ),
            (DiagnosisState::Idle { .. }, DiagnosisEvent::CaptureFailed { error }) => (
                DiagnosisState::Idle {
                    error: Some(DiagnosisFailure::Capture(error)),
                },
                Vec::new(),
            ),
            (DiagnosisState::Captured { request }, DiagnosisEvent::AnalysisStarted) => {
                (DiagnosisState::Analyzing { request }, Vec::new())
            }
            (DiagnosisState::Analyzing { request }, DiagnosisEvent::AnalysisCompleted { result }) => {
                (DiagnosisState::Review { request, result }, Vec::new())
            }
            (DiagnosisState::Analyzing { .. }, DiagnosisEvent::AnalysisFailed { error }) => (
                DiagnosisState::Idle {
                    error: Some(DiagnosisFailure::Analysis(error)),
                },
                Vec::new(),
            ),
            (DiagnosisState::Review { .. }, DiagnosisEvent::Reset) => {
                (DiagnosisState::Idle { error: None }, Vec::new())
            }
            (DiagnosisState::Idle { .. }, DiagnosisEvent::Reset) => {
                (DiagnosisState::Idle { error: None }, Vec::new())
            }
            // Everything else is ignored, including captures while an
            // attempt is already in flight.
            (state, _event) => (state, Vec::new()),
        }
    }
}

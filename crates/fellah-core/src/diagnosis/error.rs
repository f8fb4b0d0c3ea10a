use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture provider error types.
///
/// All recoverable: the flow stays in `Idle` and the user may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("capture canceled by the user")]
    Canceled,

    #[error("capture device unavailable")]
    DeviceUnavailable,
}

/// Analysis provider error types.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AnalysisError {
    #[error("analysis provider timed out")]
    Timeout,

    #[error("analysis provider failed: {0}")]
    Provider(String),
}

/// Last failure of a diagnosis attempt, surfaced in the `Idle` state for
/// the rendering layer and cleared on the next capture or reset.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DiagnosisFailure {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

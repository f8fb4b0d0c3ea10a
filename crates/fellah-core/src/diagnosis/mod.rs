//! Diagnosis domain module.
//!
//! One diagnosis attempt at a time: capture an image, hand it to the
//! analysis provider, present the verdict, reset. The state machine is
//! pure; timers and providers live behind ports.

pub mod error;
pub mod model;
pub mod state_machine;

pub use error::{AnalysisError, CaptureError, DiagnosisFailure};
pub use model::{CaptureSource, Confidence, DiagnosisRequest, DiagnosisResult, ImageHandle};
pub use state_machine::{DiagnosisAction, DiagnosisEvent, DiagnosisState, DiagnosisStateMachine};

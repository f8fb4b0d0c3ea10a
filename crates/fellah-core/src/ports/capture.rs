use crate::diagnosis::{CaptureError, CaptureSource, ImageHandle};

/// Platform capture capability (camera shutter or gallery picker).
///
/// The diagnosis flow only consumes the outcome; permission prompts and
/// picker UI belong to the platform side of this port.
#[async_trait::async_trait]
pub trait CapturePort: Send + Sync {
    async fn capture(&self, source: CaptureSource) -> Result<ImageHandle, CaptureError>;
}

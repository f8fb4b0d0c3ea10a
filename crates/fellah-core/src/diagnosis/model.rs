//! Diagnosis domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::onboarding::ImageUri;

/// Where the diagnosed image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureSource {
    Camera,
    Gallery,
}

/// Reference to a captured image, as handed over by the capture provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub uri: ImageUri,
}

impl ImageHandle {
    pub fn new(uri: impl Into<ImageUri>) -> Self {
        Self { uri: uri.into() }
    }
}

/// One diagnosis attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub id: Uuid,
    pub image: ImageHandle,
    pub source: CaptureSource,
    /// Wall-clock capture time.
    pub requested_at: DateTime<Utc>,
}

impl DiagnosisRequest {
    pub fn new(image: ImageHandle, source: CaptureSource, requested_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            source,
            requested_at,
        }
    }
}

#[derive(Debug, Error)]
#[error("confidence {0} is out of range (0..=100)")]
pub struct ConfidenceOutOfRange(pub u8);

/// Classifier confidence as an integer percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub fn new(percent: u8) -> Result<Self, ConfidenceOutOfRange> {
        if percent > 100 {
            return Err(ConfidenceOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Verdict produced by the analysis provider. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub disease: String,
    pub confidence: Confidence,
    pub severity: String,
    pub recommendation: String,
    pub treatment: String,
}

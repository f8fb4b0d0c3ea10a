//! Onboarding domain models
//!
//! The onboarding deck is an ordered, immutable sequence of slides supplied
//! by the content catalog. It is loaded once per app launch; the session
//! flow only ever walks it forward.

use serde::{Deserialize, Serialize};

/// Opaque reference to an image asset or file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUri(String);

impl ImageUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageUri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for ImageUri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl std::fmt::Display for ImageUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One slide of the onboarding deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSlide {
    pub title: String,
    pub body: String,
    pub image: ImageUri,
}

/// Ordered onboarding slide sequence, loaded once from the content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingDeck {
    slides: Vec<OnboardingSlide>,
}

impl OnboardingDeck {
    pub fn new(slides: Vec<OnboardingSlide>) -> Self {
        Self { slides }
    }

    pub fn slides(&self) -> &[OnboardingSlide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the final slide; `0` for an empty deck.
    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&OnboardingSlide> {
        self.slides.get(index)
    }
}

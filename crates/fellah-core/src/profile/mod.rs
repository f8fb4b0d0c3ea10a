//! User profile and credential models
//!
//! The profile is the in-memory session record produced by the
//! authentication provider. Nothing here is persisted; a new login
//! produces a fresh profile.

use serde::{Deserialize, Serialize};

/// Raw credential input from the auth screen.
///
/// The only rule the flow enforces is non-empty fields; everything else is
/// the authentication provider's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentialInput {
    pub phone_number: String,
    pub activation_code: String,
}

impl AuthCredentialInput {
    pub fn new(phone_number: impl Into<String>, activation_code: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            activation_code: activation_code.into(),
        }
    }
}

/// Subscription tier of the signed-in farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    Free,
    Pro,
}

/// The signed-in user, as returned by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub farm_size: String,
    pub subscription: Subscription,
}

impl UserProfile {
    pub fn is_pro(&self) -> bool {
        self.subscription == Subscription::Pro
    }
}

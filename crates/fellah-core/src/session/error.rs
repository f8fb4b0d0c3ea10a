use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication error types.
///
/// Erreurs d'authentification.
///
/// Only the two empty-input variants are produced today; the simulated
/// provider accepts anything else. `InvalidCredentials` is the seam a real
/// backend will use without changing the state machine shape.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AuthError {
    #[error("phone number is empty")]
    EmptyPhoneNumber,

    #[error("activation code is empty")]
    EmptyActivationCode,

    #[error("credentials were rejected")]
    InvalidCredentials,
}

//! Session bootstrap domain module.
//!
//! Defines the state machine that walks one app launch through
//! splash, onboarding, authentication and into the main app.

pub mod error;
pub mod state_machine;

pub use error::AuthError;
pub use state_machine::{SessionAction, SessionEvent, SessionState, SessionStateMachine};

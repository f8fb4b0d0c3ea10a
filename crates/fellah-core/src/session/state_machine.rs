//! Session bootstrap state machine.
//!
//! Defines a pure state transition function for the app launch flow:
//! `Splash → Onboarding → Auth → Main`. Side effects are returned as
//! actions for the orchestration layer to execute.

use serde::{Deserialize, Serialize};

use crate::profile::{AuthCredentialInput, Subscription, UserProfile};
use crate::session::AuthError;

/// Session bootstrap state.
///
/// État du lancement de session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Splash screen, waiting for the auto-advance timer.
    Splash,
    /// Onboarding deck at the given slide index.
    Onboarding { index: usize },
    /// Authentication screen; `error` holds the last rejected attempt.
    Auth { error: Option<AuthError> },
    /// Main app with a signed-in profile.
    Main { profile: UserProfile },
}

impl SessionState {
    /// Stable stage key for logging and the rendering layer.
    pub fn stage(&self) -> &'static str {
        match self {
            SessionState::Splash => "splash",
            SessionState::Onboarding { .. } => "onboarding",
            SessionState::Auth { .. } => "auth",
            SessionState::Main { .. } => "main",
        }
    }
}

/// Events that drive the session bootstrap flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Splash timer elapsed.
    SplashElapsed,
    /// User pressed "next" on the onboarding deck.
    NextSlide,
    /// User pressed "skip" on the onboarding deck.
    SkipOnboarding,
    /// User pressed "continue" on the auth screen.
    SubmitCredentials { credentials: AuthCredentialInput },
    /// Authentication provider accepted the credentials.
    SessionEstablished { profile: UserProfile },
    /// Authentication provider rejected the credentials.
    SessionRejected { error: AuthError },
    /// User signed out from the main app.
    LoggedOut,
    /// User upgraded their subscription.
    SubscriptionUpgraded,
}

impl SessionEvent {
    /// Event name without payload, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::SplashElapsed => "splash_elapsed",
            SessionEvent::NextSlide => "next_slide",
            SessionEvent::SkipOnboarding => "skip_onboarding",
            SessionEvent::SubmitCredentials { .. } => "submit_credentials",
            SessionEvent::SessionEstablished { .. } => "session_established",
            SessionEvent::SessionRejected { .. } => "session_rejected",
            SessionEvent::LoggedOut => "logged_out",
            SessionEvent::SubscriptionUpgraded => "subscription_upgraded",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Hand the credentials to the authentication provider.
    EstablishSession { credentials: AuthCredentialInput },
}

impl SessionAction {
    /// Action name without payload, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::EstablishSession { .. } => "establish_session",
        }
    }
}

/// Pure session state machine: no side effects, no clocks.
///
/// The machine is parameterized by the onboarding deck length; the deck
/// itself never changes after launch.
#[derive(Debug, Clone)]
pub struct SessionStateMachine {
    last_index: usize,
}

impl SessionStateMachine {
    pub fn new(slide_count: usize) -> Self {
        Self {
            last_index: slide_count.saturating_sub(1),
        }
    }

    pub fn transition(
        &self,
        state: SessionState,
        event: SessionEvent,
    ) -> (SessionState, Vec<SessionAction>) {
        match (state, event) {
            (SessionState::Splash, SessionEvent::SplashElapsed) => {
                (SessionState::Onboarding { index: 0 }, Vec::new())
            }
            (SessionState::Onboarding { index }, SessionEvent::NextSlide) => {
                if index < self.last_index {
                    (SessionState::Onboarding { index: index + 1 }, Vec::new())
                } else {
                    (SessionState::Auth { error: None }, Vec::new())
                }
            }
            (SessionState::Onboarding { .. }, SessionEvent::SkipOnboarding) => {
                (SessionState::Auth { error: None }, Vec::new())
            }
            (SessionState::Auth { .. }, SessionEvent::SubmitCredentials { credentials }) => {
                if credentials.phone_number.trim().is_empty() {
                    return (
                        SessionState::Auth {
                            error: Some(AuthError::EmptyPhoneNumber),
                        },
                        Vec::new(),
                    );
                }
                if credentials.activation_code.trim().is_empty() {
                    return (
                        SessionState::Auth {
                            error: Some(AuthError::EmptyActivationCode),
                        },
                        Vec::new(),
                    );
                }
                (
                    SessionState::Auth { error: None },
                    vec![SessionAction::EstablishSession { credentials }],
                )
            }
            (SessionState::Auth { .. }, SessionEvent::SessionEstablished { profile }) => {
                (SessionState::Main { profile }, Vec::new())
            }
            (SessionState::Auth { .. }, SessionEvent::SessionRejected { error }) => (
                SessionState::Auth { error: Some(error) },
                Vec::new(),
            ),
            (SessionState::Main { .. }, SessionEvent::LoggedOut) => {
                (SessionState::Auth { error: None }, Vec::new())
            }
            (SessionState::Main { mut profile }, SessionEvent::SubscriptionUpgraded) => {
                profile.subscription = Subscription::Pro;
                (SessionState::Main { profile }, Vec::new())
            }
            // Events not defined for the current state are ignored.
            (state, _event) => (state, Vec::new()),
        }
    }
}

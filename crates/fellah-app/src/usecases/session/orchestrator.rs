//! Session bootstrap orchestrator.
//!
//! Coordinates the session state machine, the splash timer, and the
//! authentication provider. The rendering layer drives it through the
//! public event methods and observes it through the session event port.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, info, info_span, Instrument};

use fellah_core::onboarding::OnboardingDeck;
use fellah_core::ports::{AuthPort, SessionEventPort};
use fellah_core::profile::AuthCredentialInput;
use fellah_core::session::{
    AuthError, SessionAction, SessionEvent, SessionState, SessionStateMachine,
};

use crate::usecases::FlowContext;

/// Orchestrator that drives one app launch through
/// `Splash → Onboarding → Auth → Main`.
///
/// One instance per launch. `start` arms the splash timer; `shutdown`
/// cancels it so no transition can fire after teardown. The timer task
/// only holds a weak reference, so a dropped flow never transitions
/// either.
pub struct SessionOrchestrator {
    weak_self: Weak<Self>,
    context: Arc<FlowContext<SessionState>>,
    machine: SessionStateMachine,
    auth: Arc<dyn AuthPort>,
    events: Arc<dyn SessionEventPort>,
    splash_delay: Duration,
    splash_timer: Mutex<Option<AbortHandle>>,
    started: AtomicBool,
}

impl SessionOrchestrator {
    pub fn new(
        deck: &OnboardingDeck,
        splash_delay: Duration,
        auth: Arc<dyn AuthPort>,
        events: Arc<dyn SessionEventPort>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            weak_self: weak_self.clone(),
            context: FlowContext::new(SessionState::Splash).arc(),
            machine: SessionStateMachine::new(deck.len()),
            auth,
            events,
            splash_delay,
            splash_timer: Mutex::new(None),
            started: AtomicBool::new(false),
        })
    }

    /// Arms the splash timer. Idempotent: the splash advances at most once
    /// per flow instance.
    pub async fn start(&self) -> SessionState {
        if self.started.swap(true, Ordering::SeqCst) {
            return self.context.get_state().await;
        }

        let weak = self.weak_self.clone();
        let delay = self.splash_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(flow) = weak.upgrade() {
                flow.dispatch(SessionEvent::SplashElapsed).await;
            }
        });
        *self.splash_timer.lock().await = Some(task.abort_handle());

        self.context.get_state().await
    }

    /// Cancels the splash timer. After this returns, the flow emits no
    /// further transitions on its own.
    pub async fn shutdown(&self) {
        if let Some(timer) = self.splash_timer.lock().await.take() {
            timer.abort();
            debug!("splash timer canceled");
        }
    }

    pub async fn next_slide(&self) -> SessionState {
        self.dispatch(SessionEvent::NextSlide).await
    }

    pub async fn skip_onboarding(&self) -> SessionState {
        self.dispatch(SessionEvent::SkipOnboarding).await
    }

    /// "Continue" on the auth screen. Returns the rejection when the
    /// credentials do not pass, which today only happens on empty input.
    pub async fn submit_credentials(
        &self,
        credentials: AuthCredentialInput,
    ) -> Result<SessionState, AuthError> {
        let state = self
            .dispatch(SessionEvent::SubmitCredentials { credentials })
            .await;
        match state {
            SessionState::Auth { error: Some(error) } => Err(error),
            state => Ok(state),
        }
    }

    pub async fn logout(&self) -> SessionState {
        self.dispatch(SessionEvent::LoggedOut).await
    }

    pub async fn upgrade_subscription(&self) -> SessionState {
        self.dispatch(SessionEvent::SubscriptionUpgraded).await
    }

    pub async fn state(&self) -> SessionState {
        self.context.get_state().await
    }

    async fn dispatch(&self, event: SessionEvent) -> SessionState {
        // Serialize dispatch calls so each transition's side effects are
        // committed before the next event is processed.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("flow.session.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let (next, actions) = self.machine.transition(current, event);
                if next != from {
                    info!(from = from.stage(), to = next.stage(), "session state transition");
                    self.context.set_state(next.clone()).await;
                    self.events.emit_session_state_changed(next.clone()).await;
                } else if actions.is_empty() {
                    debug!(stage = from.stage(), "event ignored in current stage");
                }
                pending_events.extend(self.execute_actions(actions).await);
                current = next;
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<SessionAction>) -> Vec<SessionEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(action = action.name(), "session executing action");
            match action {
                SessionAction::EstablishSession { credentials } => {
                    match self.auth.authenticate(&credentials).await {
                        Ok(profile) => {
                            follow_up_events.push(SessionEvent::SessionEstablished { profile });
                        }
                        Err(error) => {
                            follow_up_events.push(SessionEvent::SessionRejected { error });
                        }
                    }
                }
            }
        }
        follow_up_events
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::advance;

use fellah_app::usecases::SessionOrchestrator;
use fellah_core::onboarding::{ImageUri, OnboardingDeck, OnboardingSlide};
use fellah_core::ports::{AuthPort, SessionEventPort};
use fellah_core::profile::{AuthCredentialInput, Subscription, UserProfile};
use fellah_core::session::{AuthError, SessionState};

const SPLASH_DELAY: Duration = Duration::from_millis(1200);

struct RecordingSessionEvents {
    states: Mutex<Vec<SessionState>>,
}

impl RecordingSessionEvents {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            states: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<SessionState> {
        self.states.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionEventPort for RecordingSessionEvents {
    async fn emit_session_state_changed(&self, state: SessionState) {
        self.states.lock().unwrap().push(state);
    }
}

struct CountingAuth {
    calls: AtomicUsize,
}

impl CountingAuth {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthPort for CountingAuth {
    async fn authenticate(
        &self,
        credentials: &AuthCredentialInput,
    ) -> Result<UserProfile, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(UserProfile {
            id: "1".into(),
            name: "Ahmad Ben Ali".into(),
            phone: credentials.phone_number.clone(),
            location: "Béja, Tunisie".into(),
            farm_size: "5 hectares".into(),
            subscription: Subscription::Free,
        })
    }
}

struct RejectingAuth;

#[async_trait]
impl AuthPort for RejectingAuth {
    async fn authenticate(&self, _: &AuthCredentialInput) -> Result<UserProfile, AuthError> {
        Err(AuthError::InvalidCredentials)
    }
}

fn deck(slide_count: usize) -> OnboardingDeck {
    OnboardingDeck::new(
        (0..slide_count)
            .map(|i| OnboardingSlide {
                title: format!("slide {i}"),
                body: format!("slide {i} body"),
                image: ImageUri::from("asset://onboarding/slide.png"),
            })
            .collect(),
    )
}

fn credentials() -> AuthCredentialInput {
    AuthCredentialInput::new("+216 20 123 456", "FELLAH-2024")
}

/// Lets spawned timer tasks run to completion on the paused runtime.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn bootstrap_walks_the_exact_stage_sequence() {
    let events = RecordingSessionEvents::new();
    let auth = CountingAuth::new();
    let flow = SessionOrchestrator::new(
        &deck(2),
        SPLASH_DELAY,
        auth.clone(),
        events.clone(),
    );

    assert_eq!(flow.start().await, SessionState::Splash);
    settle().await;

    advance(SPLASH_DELAY).await;
    settle().await;
    assert_eq!(flow.state().await, SessionState::Onboarding { index: 0 });

    assert_eq!(
        flow.next_slide().await,
        SessionState::Onboarding { index: 1 }
    );
    assert_eq!(flow.next_slide().await, SessionState::Auth { error: None });

    let state = flow.submit_credentials(credentials()).await.unwrap();
    let profile = match state {
        SessionState::Main { profile } => profile,
        other => panic!("expected Main, got {other:?}"),
    };
    assert_eq!(profile.phone, "+216 20 123 456");
    assert_eq!(auth.call_count(), 1);

    let stages: Vec<&str> = events.recorded().iter().map(|s| s.stage()).collect();
    assert_eq!(stages, vec!["onboarding", "onboarding", "auth", "main"]);
}

#[tokio::test(start_paused = true)]
async fn skip_jumps_to_auth_and_is_a_no_op_afterwards() {
    let events = RecordingSessionEvents::new();
    let flow = SessionOrchestrator::new(
        &deck(3),
        SPLASH_DELAY,
        CountingAuth::new(),
        events.clone(),
    );

    flow.start().await;
    settle().await;
    advance(SPLASH_DELAY).await;
    settle().await;

    assert_eq!(
        flow.skip_onboarding().await,
        SessionState::Auth { error: None }
    );

    let emissions_before = events.recorded().len();
    assert_eq!(
        flow.skip_onboarding().await,
        SessionState::Auth { error: None }
    );
    assert_eq!(events.recorded().len(), emissions_before);
}

#[tokio::test(start_paused = true)]
async fn slide_index_never_leaves_its_bounds() {
    let flow = SessionOrchestrator::new(
        &deck(3),
        SPLASH_DELAY,
        CountingAuth::new(),
        RecordingSessionEvents::new(),
    );

    flow.start().await;
    settle().await;
    advance(SPLASH_DELAY).await;
    settle().await;

    let mut previous = 0;
    loop {
        match flow.next_slide().await {
            SessionState::Onboarding { index } => {
                assert!(index >= previous);
                assert!(index <= 2);
                previous = index;
            }
            SessionState::Auth { .. } => break,
            other => panic!("unexpected state {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn splash_advances_exactly_once() {
    let events = RecordingSessionEvents::new();
    let flow = SessionOrchestrator::new(
        &deck(2),
        SPLASH_DELAY,
        CountingAuth::new(),
        events.clone(),
    );

    flow.start().await;
    // A second start must not arm a second timer.
    flow.start().await;
    settle().await;

    advance(SPLASH_DELAY).await;
    settle().await;
    advance(Duration::from_secs(30)).await;
    settle().await;

    assert_eq!(flow.state().await, SessionState::Onboarding { index: 0 });
    assert_eq!(events.recorded().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn splash_timer_never_fires_after_teardown() {
    let events = RecordingSessionEvents::new();
    let flow = SessionOrchestrator::new(
        &deck(2),
        SPLASH_DELAY,
        CountingAuth::new(),
        events.clone(),
    );

    flow.start().await;
    settle().await;
    flow.shutdown().await;

    advance(Duration::from_secs(30)).await;
    settle().await;

    assert_eq!(flow.state().await, SessionState::Splash);
    assert!(events.recorded().is_empty());
}

#[tokio::test(start_paused = true)]
async fn empty_credentials_never_reach_the_provider() {
    let auth = CountingAuth::new();
    let flow = SessionOrchestrator::new(
        &deck(2),
        SPLASH_DELAY,
        auth.clone(),
        RecordingSessionEvents::new(),
    );

    flow.start().await;
    settle().await;
    advance(SPLASH_DELAY).await;
    settle().await;
    flow.skip_onboarding().await;

    let error = flow
        .submit_credentials(AuthCredentialInput::new("", "FELLAH-2024"))
        .await
        .unwrap_err();
    assert_eq!(error, AuthError::EmptyPhoneNumber);

    let error = flow
        .submit_credentials(AuthCredentialInput::new("+216 20 123 456", ""))
        .await
        .unwrap_err();
    assert_eq!(error, AuthError::EmptyActivationCode);

    assert_eq!(auth.call_count(), 0);
    assert_eq!(
        flow.state().await,
        SessionState::Auth {
            error: Some(AuthError::EmptyActivationCode)
        }
    );
}

#[tokio::test(start_paused = true)]
async fn provider_rejection_keeps_auth_with_the_error() {
    let flow = SessionOrchestrator::new(
        &deck(2),
        SPLASH_DELAY,
        Arc::new(RejectingAuth),
        RecordingSessionEvents::new(),
    );

    flow.start().await;
    settle().await;
    advance(SPLASH_DELAY).await;
    settle().await;
    flow.skip_onboarding().await;

    let error = flow.submit_credentials(credentials()).await.unwrap_err();
    assert_eq!(error, AuthError::InvalidCredentials);
    assert_eq!(
        flow.state().await,
        SessionState::Auth {
            error: Some(AuthError::InvalidCredentials)
        }
    );
}

#[tokio::test(start_paused = true)]
async fn logout_drops_the_profile_and_upgrade_marks_pro() {
    let flow = SessionOrchestrator::new(
        &deck(2),
        SPLASH_DELAY,
        CountingAuth::new(),
        RecordingSessionEvents::new(),
    );

    flow.start().await;
    settle().await;
    advance(SPLASH_DELAY).await;
    settle().await;
    flow.skip_onboarding().await;
    flow.submit_credentials(credentials()).await.unwrap();

    match flow.upgrade_subscription().await {
        SessionState::Main { profile } => {
            assert_eq!(profile.subscription, Subscription::Pro);
            assert!(profile.is_pro());
        }
        other => panic!("expected Main, got {other:?}"),
    }

    assert_eq!(flow.logout().await, SessionState::Auth { error: None });
}

//! Use cases and flow orchestrators.

pub mod diagnosis;
pub mod flow_context;
pub mod market;
pub mod onboarding;
pub mod session;

pub use diagnosis::DiagnosisOrchestrator;
pub use flow_context::FlowContext;
pub use market::ListMarketQuotes;
pub use onboarding::LoadOnboardingDeck;
pub use session::SessionOrchestrator;

use crate::catalog::MarketQuote;
use crate::onboarding::OnboardingSlide;

/// Static content catalog: onboarding deck and reference listings.
///
/// Read-only; loaded once before first render.
#[async_trait::async_trait]
pub trait ContentCatalogPort: Send + Sync {
    async fn onboarding_slides(&self) -> anyhow::Result<Vec<OnboardingSlide>>;

    async fn market_quotes(&self) -> anyhow::Result<Vec<MarketQuote>>;
}

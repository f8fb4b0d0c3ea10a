use std::sync::Arc;

use log::info;

use fellah_core::onboarding::OnboardingDeck;
use fellah_core::ports::ContentCatalogPort;

/// Use case for loading the onboarding deck from the content catalog.
///
/// The deck is loaded once per launch, before the session flow starts;
/// an empty deck is a catalog defect, not something the flow can walk.
pub struct LoadOnboardingDeck {
    catalog: Arc<dyn ContentCatalogPort>,
}

impl LoadOnboardingDeck {
    pub fn new(catalog: Arc<dyn ContentCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> anyhow::Result<OnboardingDeck> {
        let slides = self.catalog.onboarding_slides().await?;
        if slides.is_empty() {
            anyhow::bail!("content catalog returned an empty onboarding deck");
        }
        info!("Onboarding deck loaded: {} slides", slides.len());
        Ok(OnboardingDeck::new(slides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fellah_core::catalog::MarketQuote;
    use fellah_core::onboarding::{ImageUri, OnboardingSlide};
    use mockall::mock;

    mock! {
        Catalog {}

        #[async_trait]
        impl ContentCatalogPort for Catalog {
            async fn onboarding_slides(&self) -> anyhow::Result<Vec<OnboardingSlide>>;
            async fn market_quotes(&self) -> anyhow::Result<Vec<MarketQuote>>;
        }
    }

    fn slide(title: &str) -> OnboardingSlide {
        OnboardingSlide {
            title: title.to_string(),
            body: format!("{title} body"),
            image: ImageUri::from("asset://onboarding/slide.png"),
        }
    }

    #[tokio::test]
    async fn execute_returns_the_catalog_deck_in_order() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_onboarding_slides()
            .returning(|| Ok(vec![slide("one"), slide("two")]));

        let deck = LoadOnboardingDeck::new(Arc::new(catalog))
            .execute()
            .await
            .unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().title, "one");
        assert_eq!(deck.get(1).unwrap().title, "two");
    }

    #[tokio::test]
    async fn execute_rejects_an_empty_deck() {
        let mut catalog = MockCatalog::new();
        catalog.expect_onboarding_slides().returning(|| Ok(Vec::new()));

        let result = LoadOnboardingDeck::new(Arc::new(catalog)).execute().await;

        assert!(result.is_err());
    }
}

//! Built-in content catalog.
//!
//! In-memory catalog with the shipped onboarding deck and the static
//! market price board. Content is loaded once at construction and never
//! mutated afterwards.

use async_trait::async_trait;

use fellah_core::catalog::MarketQuote;
use fellah_core::onboarding::{ImageUri, OnboardingSlide};
use fellah_core::ports::ContentCatalogPort;

pub struct StaticCatalog {
    slides: Vec<OnboardingSlide>,
    quotes: Vec<MarketQuote>,
}

impl StaticCatalog {
    pub fn new(slides: Vec<OnboardingSlide>, quotes: Vec<MarketQuote>) -> Self {
        Self { slides, quotes }
    }

    /// The content shipped with the app.
    pub fn builtin() -> Self {
        Self::new(builtin_slides(), builtin_quotes())
    }
}

#[async_trait]
impl ContentCatalogPort for StaticCatalog {
    async fn onboarding_slides(&self) -> anyhow::Result<Vec<OnboardingSlide>> {
        Ok(self.slides.clone())
    }

    async fn market_quotes(&self) -> anyhow::Result<Vec<MarketQuote>> {
        Ok(self.quotes.clone())
    }
}

fn builtin_slides() -> Vec<OnboardingSlide> {
    vec![
        OnboardingSlide {
            title: "Diagnostiquez vos cultures".into(),
            body: "Photographiez une feuille malade et obtenez un diagnostic en quelques secondes."
                .into(),
            image: ImageUri::from("asset://onboarding/diagnostic.png"),
        },
        OnboardingSlide {
            title: "Suivez les prix du marché".into(),
            body: "Consultez chaque jour les prix des produits agricoles de votre région.".into(),
            image: ImageUri::from("asset://onboarding/marche.png"),
        },
        OnboardingSlide {
            title: "Irriguez au bon moment".into(),
            body: "Recevez des conseils d'irrigation adaptés à vos parcelles et à la météo.".into(),
            image: ImageUri::from("asset://onboarding/irrigation.png"),
        },
    ]
}

fn builtin_quotes() -> Vec<MarketQuote> {
    vec![
        MarketQuote {
            product: "Tomates".into(),
            price_millimes: 1750,
            unit: "TND/kg".into(),
            trend_millimes: 100,
        },
        MarketQuote {
            product: "Blé".into(),
            price_millimes: 1200,
            unit: "TND/kg".into(),
            trend_millimes: 0,
        },
        MarketQuote {
            product: "Olives".into(),
            price_millimes: 7500,
            unit: "TND/L".into(),
            trend_millimes: -200,
        },
        MarketQuote {
            product: "Oranges".into(),
            price_millimes: 2100,
            unit: "TND/kg".into(),
            trend_millimes: 50,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_deck_is_ordered_and_non_empty() {
        let catalog = StaticCatalog::builtin();
        let slides = catalog.onboarding_slides().await.unwrap();

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, "Diagnostiquez vos cultures");
    }

    #[tokio::test]
    async fn builtin_quotes_cover_the_market_board() {
        let catalog = StaticCatalog::builtin();
        let quotes = catalog.market_quotes().await.unwrap();

        assert_eq!(quotes.len(), 4);
        let olives = quotes.iter().find(|q| q.product == "Olives").unwrap();
        assert_eq!(olives.price_millimes, 7500);
        assert_eq!(olives.trend_millimes, -200);
    }
}

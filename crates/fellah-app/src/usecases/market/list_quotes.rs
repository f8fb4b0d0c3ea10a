use std::sync::Arc;

use fellah_core::ports::ContentCatalogPort;

/// Data transfer object for one market board row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MarketQuoteDto {
    pub product: String,
    pub price_millimes: i64,
    pub unit: String,
    pub trend_millimes: i64,
}

/// Use case for listing the static market price board.
pub struct ListMarketQuotes {
    catalog: Arc<dyn ContentCatalogPort>,
}

impl ListMarketQuotes {
    pub fn new(catalog: Arc<dyn ContentCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> anyhow::Result<Vec<MarketQuoteDto>> {
        let quotes = self.catalog.market_quotes().await?;
        Ok(quotes
            .into_iter()
            .map(|quote| MarketQuoteDto {
                product: quote.product,
                price_millimes: quote.price_millimes,
                unit: quote.unit,
                trend_millimes: quote.trend_millimes,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fellah_core::catalog::MarketQuote;
    use fellah_core::onboarding::OnboardingSlide;

    struct FixedCatalog;

    #[async_trait]
    impl ContentCatalogPort for FixedCatalog {
        async fn onboarding_slides(&self) -> anyhow::Result<Vec<OnboardingSlide>> {
            Ok(Vec::new())
        }

        async fn market_quotes(&self) -> anyhow::Result<Vec<MarketQuote>> {
            Ok(vec![MarketQuote {
                product: "Tomates".into(),
                price_millimes: 1750,
                unit: "TND/kg".into(),
                trend_millimes: 100,
            }])
        }
    }

    #[tokio::test]
    async fn execute_maps_catalog_rows_to_dtos() {
        let quotes = ListMarketQuotes::new(Arc::new(FixedCatalog))
            .execute()
            .await
            .unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].product, "Tomates");
        assert_eq!(quotes[0].price_millimes, 1750);
        assert_eq!(quotes[0].trend_millimes, 100);
    }
}

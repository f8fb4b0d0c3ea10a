//! Static catalog content
//!
//! Read-only reference data served by the content catalog next to the
//! onboarding deck. Quotes are static listings, not a market engine.

use serde::{Deserialize, Serialize};

/// One product row of the market price board.
///
/// Prices are in millimes (1 TND = 1000 millimes) to keep the catalog
/// integer-only; `trend_millimes` is the change against the previous
/// listing, negative for a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub product: String,
    pub price_millimes: i64,
    pub unit: String,
    pub trend_millimes: i64,
}

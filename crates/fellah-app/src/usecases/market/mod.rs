//! Market board use cases.

pub mod list_quotes;

pub use list_quotes::{ListMarketQuotes, MarketQuoteDto};

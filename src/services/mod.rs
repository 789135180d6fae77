//! Collaborator boundaries feeding the scanner.

pub mod market_data;

pub use market_data::{InMemoryMarketDataStore, MarketDataProvider};

// In-memory source keyed by market id (tests, offline demos)

use std::collections::HashMap;

use super::{BookSource, SourceError, SourceResult};
use crate::engine::types::RawBook;
use crate::market_data::market::MarketInfo;

#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    books: HashMap<String, RawBook>,
    markets: HashMap<String, MarketInfo>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, market_id: impl Into<String>, book: RawBook) -> Self {
        self.books.insert(market_id.into(), book);
        self
    }

    pub fn with_market(mut self, market: MarketInfo) -> Self {
        self.markets.insert(market.market_id.clone(), market);
        self
    }
}

#[async_trait::async_trait]
impl BookSource for StaticSource {
    async fn fetch_raw_book(&self, market_id: &str) -> SourceResult<RawBook> {
        self.books
            .get(market_id)
            .cloned()
            .ok_or_else(|| SourceError::MarketNotFound(market_id.to_string()))
    }

    async fn fetch_market(&self, market_id: &str) -> SourceResult<MarketInfo> {
        self.markets
            .get(market_id)
            .cloned()
            .ok_or_else(|| SourceError::MarketNotFound(market_id.to_string()))
    }
}

// Shared trait + errors for raw book sources

use thiserror::Error;

use crate::engine::types::RawBook;
use crate::market_data::market::MarketInfo;
use crate::market_data::normaliser::NormaliseError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("market {0} not found")]
    MarketNotFound(String),
    #[error("indexer returned {status} for market {market_id}")]
    Status { status: u16, market_id: String },
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid indexer base url {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("invalid market id {0:?}")]
    InvalidMarketId(String),
    #[error("malformed amount in {field}: {source}")]
    Amount {
        field: &'static str,
        #[source]
        source: NormaliseError,
    },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies raw four-sided books (and market records) for a market id.
#[async_trait::async_trait]
pub trait BookSource: Send + Sync {
    async fn fetch_raw_book(&self, market_id: &str) -> SourceResult<RawBook>;

    async fn fetch_market(&self, market_id: &str) -> SourceResult<MarketInfo>;
}

pub mod fixture;
pub mod indexer;
pub mod indexer_types;

pub use fixture::StaticSource;
pub use indexer::IndexerSource;

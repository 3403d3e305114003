// Indexer adapter: REST reads of escrow-backed orders for one market

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::indexer_types::WireBook;
use super::{BookSource, SourceError, SourceResult};
use crate::config::IndexerConfig;
use crate::engine::types::RawBook;
use crate::market_data::market::MarketInfo;

pub struct IndexerSource {
    base_url: Url, // e.g. "https://indexer.example"
    client: reqwest::Client,
}

impl IndexerSource {
    pub fn new(cfg: &IndexerConfig) -> SourceResult<Self> {
        let invalid = |reason: String| SourceError::BaseUrl { url: cfg.base_url.clone(), reason };
        let base_url = Url::parse(cfg.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical url".to_string()));
        }
        let client = reqwest::Client::builder().timeout(cfg.timeout()).build()?;
        Ok(Self { base_url, client })
    }

    pub fn orderbook_url(&self, market_id: &str) -> SourceResult<Url> {
        self.endpoint(market_id, &["orderbook"])
    }

    pub fn market_url(&self, market_id: &str) -> SourceResult<Url> {
        self.endpoint(market_id, &[])
    }

    // {base}/markets/{market_id}/{tail..}; the id is percent-escaped into a single segment
    fn endpoint(&self, market_id: &str, tail: &[&str]) -> SourceResult<Url> {
        // "." and ".." would be dropped or resolved as path navigation
        if matches!(market_id, "" | "." | "..") {
            return Err(SourceError::InvalidMarketId(market_id.to_string()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::BaseUrl {
                url: self.base_url.to_string(),
                reason: "not a hierarchical url".to_string(),
            })?
            .pop_if_empty()
            .push("markets")
            .push(market_id)
            .extend(tail);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, market_id: &str) -> SourceResult<T> {
        let result = self.send(url, market_id).await;
        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!("unibook_source_requests_total", "outcome" => outcome).increment(1);
        result
    }

    async fn send<T: DeserializeOwned>(&self, url: Url, market_id: &str) -> SourceResult<T> {
        let res = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "Indexer request failed");
            SourceError::Http(e)
        })?;

        match res.status() {
            status if status.is_success() => Ok(res.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(SourceError::MarketNotFound(market_id.to_string())),
            status => {
                warn!(%url, status = status.as_u16(), "Indexer returned non-success status");
                Err(SourceError::Status {
                    status: status.as_u16(),
                    market_id: market_id.to_string(),
                })
            }
        }
    }
}

#[async_trait::async_trait]
impl BookSource for IndexerSource {
    #[instrument(skip(self))]
    async fn fetch_raw_book(&self, market_id: &str) -> SourceResult<RawBook> {
        let url = self.orderbook_url(market_id)?;
        let wire: WireBook = self.get_json(url, market_id).await?;
        let book = RawBook::try_from(wire)?;
        debug!(market_id, total_orders = book.total_orders(), "Fetched raw book");
        Ok(book)
    }

    #[instrument(skip(self))]
    async fn fetch_market(&self, market_id: &str) -> SourceResult<MarketInfo> {
        let url = self.market_url(market_id)?;
        self.get_json(url, market_id).await
    }
}

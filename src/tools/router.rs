// Router ties a book source to the unifier and renders tool results
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{ToolCall, ToolError};
use crate::config::AppConfig;
use crate::engine::unify;
use crate::market_data::adapters::BookSource;
use crate::market_data::market::MarketInfo;
use crate::market_data::view::OrderbookView;

pub struct ToolRouter<S> {
    source: S,
    config: Arc<AppConfig>,
}

impl<S: BookSource> ToolRouter<S> {
    pub fn new(source: S, config: Arc<AppConfig>) -> Self {
        Self { source, config }
    }

    #[instrument(skip(self), fields(tool = call.name()))]
    pub async fn call(&self, call: ToolCall) -> Result<Value, ToolError> {
        let result = match call {
            ToolCall::GetOrderbook(args) => {
                let view = self.orderbook(args.market_id.as_deref(), args.depth).await?;
                serde_json::to_value(view)
            }
            ToolCall::GetMarket(args) => {
                let market = self.market(args.market_id.as_deref()).await?;
                serde_json::to_value(market)
            }
        };
        result.map_err(ToolError::Encode)
    }

    pub async fn orderbook(
        &self,
        market_id: Option<&str>,
        depth: Option<usize>,
    ) -> Result<OrderbookView, ToolError> {
        let market_id = self.resolve_market(market_id)?;
        let raw = self.source.fetch_raw_book(market_id).await.map_err(|e| {
            warn!(market_id, error = %e, "Failed to fetch raw book");
            e
        })?;
        let unified = unify(&raw);
        info!(
            market_id,
            total_orders = unified.total_orders,
            spread = ?unified.spread,
            "Served orderbook"
        );
        Ok(OrderbookView::render(market_id, &unified, depth))
    }

    pub async fn market(&self, market_id: Option<&str>) -> Result<MarketInfo, ToolError> {
        let market_id = self.resolve_market(market_id)?;
        let market = self.source.fetch_market(market_id).await.map_err(|e| {
            warn!(market_id, error = %e, "Failed to fetch market");
            e
        })?;
        debug!(market_id, origin = ?market.origin, "Served market");
        Ok(market)
    }

    fn resolve_market<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str, ToolError> {
        requested
            .filter(|id| !id.is_empty())
            .or(self.config.default_market.as_deref())
            .ok_or(ToolError::MissingMarket)
    }
}

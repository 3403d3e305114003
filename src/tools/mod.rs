//! Tool surface offered to agents. Transport-agnostic: callers hand in a
//! decoded `{"name": ..., "arguments": {...}}` object and get JSON back.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::market_data::adapters::SourceError;

pub mod router;

pub use router::ToolRouter;

pub const GET_ORDERBOOK: &str = "get_orderbook";
pub const GET_MARKET: &str = "get_market";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid tool call: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("no market id given and no default_market configured")]
    MissingMarket,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to encode tool result: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

fn market_id_schema() -> Value {
    json!({
        "type": "string",
        "description": "Market identifier; defaults to the configured market"
    })
}

pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_ORDERBOOK,
            description: "Unified YES-denominated orderbook for a binary market. NO bids appear \
                          as YES asks and NO asks as YES bids at 1 - price. Prices and \
                          quantities are given both as decimal strings and as integer \
                          micro-units (1000000 = 1.0).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "marketId": market_id_schema(),
                    "depth": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Max entries per side"
                    }
                }
            }),
        },
        ToolDefinition {
            name: GET_MARKET,
            description: "Market record: question, outcome tokens and, for API-sourced markets, \
                          volume, category and options.",
            input_schema: json!({
                "type": "object",
                "properties": { "marketId": market_id_schema() }
            }),
        },
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderbookArgs {
    pub market_id: Option<String>,
    pub depth: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MarketArgs {
    pub market_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    GetOrderbook(OrderbookArgs),
    GetMarket(MarketArgs),
}

#[derive(Deserialize)]
struct RawCall {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

impl ToolCall {
    pub fn from_json(value: Value) -> Result<Self, ToolError> {
        let raw: RawCall = serde_json::from_value(value).map_err(ToolError::Decode)?;
        let args = match raw.arguments {
            Some(Value::Null) | None => json!({}),
            Some(args) => args,
        };
        let call = match raw.name.as_str() {
            GET_ORDERBOOK => serde_json::from_value(args).map(ToolCall::GetOrderbook),
            GET_MARKET => serde_json::from_value(args).map(ToolCall::GetMarket),
            _ => return Err(ToolError::UnknownTool(raw.name)),
        };
        call.map_err(ToolError::Decode)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::GetOrderbook(_) => GET_ORDERBOOK,
            ToolCall::GetMarket(_) => GET_MARKET,
        }
    }
}

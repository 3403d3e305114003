//! Tool dispatch against an in-memory source. No network calls.

use std::sync::Arc;

use serde_json::{json, Value};
use unibook_rs::config::AppConfig;
use unibook_rs::engine::{RawBook, RawOrderEntry};
use unibook_rs::market_data::adapters::{SourceError, StaticSource};
use unibook_rs::market_data::market::{MarketInfo, MarketOrigin};
use unibook_rs::tools::{ToolCall, ToolError, ToolRouter};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_book() -> RawBook {
    RawBook {
        yes_bids: vec![RawOrderEntry::new(480_000, 1_000_000, "esc-yb", "carol")],
        yes_asks: vec![RawOrderEntry::new(600_000, 1_000_000, "esc-ya", "alice")],
        no_bids: vec![RawOrderEntry::new(350_000, 2_000_000, "esc-nb", "bob")],
        no_asks: vec![RawOrderEntry::new(560_000, 500_000, "esc-na", "dave")], // YES bid at 0.44
    }
}

fn sample_market() -> MarketInfo {
    MarketInfo {
        market_id: "m1".to_string(),
        question: "Will it rain tomorrow?".to_string(),
        yes_token: "tok-yes".to_string(),
        no_token: "tok-no".to_string(),
        origin: MarketOrigin::Api {
            volume: Some(12_500_000),
            category: Some("weather".to_string()),
            options: vec![],
        },
    }
}

fn price_micros(side: &Value) -> Vec<i64> {
    side.as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["priceMicros"].as_i64().unwrap())
        .collect()
}

fn router(default_market: Option<&str>) -> ToolRouter<StaticSource> {
    let source = StaticSource::new()
        .with_book("m1", sample_book())
        .with_book("empty", RawBook::default())
        .with_market(sample_market());
    let config = AppConfig {
        default_market: default_market.map(str::to_string),
        ..Default::default()
    };
    ToolRouter::new(source, Arc::new(config))
}

// ---------------------------------------------------------------------------
// get_orderbook
// ---------------------------------------------------------------------------

#[tokio::test]
async fn orderbook_tool_returns_unified_view() {
    let call =
        ToolCall::from_json(json!({"name": "get_orderbook", "arguments": {"marketId": "m1"}}))
            .unwrap();
    let result = router(None).call(call).await.unwrap();

    let asks = price_micros(&result["asks"]);
    let bids = price_micros(&result["bids"]);
    assert_eq!(asks, vec![600_000, 650_000]);
    assert_eq!(bids, vec![480_000, 440_000]);
    assert_eq!(result["asks"][1]["origin"], "no_bid_as_yes_ask");
    assert_eq!(result["asks"][1]["quantity"], "2.000000");
    assert_eq!(result["bids"][1]["origin"], "no_ask_as_yes_bid");
    assert_eq!(result["spread"], "0.120000");
    assert_eq!(result["totalOrders"], 4);
}

#[tokio::test]
async fn orderbook_depth_limits_entries_not_total() {
    let view = router(None).orderbook(Some("m1"), Some(1)).await.unwrap();
    assert_eq!(view.asks.len(), 1);
    assert_eq!(view.bids.len(), 1);
    assert_eq!(view.total_orders, 4);
}

#[tokio::test]
async fn empty_book_is_not_an_error() {
    let view = router(None).orderbook(Some("empty"), None).await.unwrap();
    assert!(view.asks.is_empty());
    assert!(view.bids.is_empty());
    assert_eq!(view.spread, None);
    assert_eq!(view.total_orders, 0);
}

#[tokio::test]
async fn default_market_fills_missing_id() {
    let call = ToolCall::from_json(json!({"name": "get_orderbook"})).unwrap();
    let result = router(Some("m1")).call(call).await.unwrap();
    assert_eq!(result["marketId"], "m1");
}

#[tokio::test]
async fn missing_market_without_default() {
    let err = router(None).orderbook(None, None).await.unwrap_err();
    assert!(matches!(err, ToolError::MissingMarket));
}

#[tokio::test]
async fn unknown_market_surfaces_source_error() {
    let err = router(None).orderbook(Some("nope"), None).await.unwrap_err();
    assert!(matches!(err, ToolError::Source(SourceError::MarketNotFound(id)) if id == "nope"));
}

// ---------------------------------------------------------------------------
// get_market
// ---------------------------------------------------------------------------

#[tokio::test]
async fn market_tool_renders_api_fields() {
    let call = ToolCall::from_json(json!({"name": "get_market", "arguments": {"marketId": "m1"}}))
        .unwrap();
    let result = router(None).call(call).await.unwrap();
    assert_eq!(result["source"], "api");
    assert_eq!(result["category"], "weather");
    assert_eq!(result["volume"], 12_500_000);
    assert_eq!(result["yesToken"], "tok-yes");
}

use serde::{Deserialize, Serialize};

/// Where a market record came from. API metadata only exists for API-sourced markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum MarketOrigin {
    OnChain,
    Api {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        volume: Option<i64>, // micro-units
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    pub market_id: String,
    pub question: String,
    pub yes_token: String,
    pub no_token: String,
    #[serde(flatten)]
    pub origin: MarketOrigin,
}

impl MarketInfo {
    pub fn volume(&self) -> Option<i64> {
        match &self.origin {
            MarketOrigin::Api { volume, .. } => *volume,
            MarketOrigin::OnChain => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match &self.origin {
            MarketOrigin::Api { category, .. } => category.as_deref(),
            MarketOrigin::OnChain => None,
        }
    }
}

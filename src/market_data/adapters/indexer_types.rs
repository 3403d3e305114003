// Wire shapes of the indexer REST API (GET /markets/{id}/orderbook)

use serde::Deserialize;

use crate::engine::types::{RawBook, RawOrderEntry};
use crate::market_data::adapters::{SourceError, SourceResult};
use crate::market_data::normaliser::parse_micros;

/// Amounts arrive either as integer micro-units or as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireAmount {
    Micros(i64),
    Decimal(String),
}

impl WireAmount {
    pub fn to_micros(&self, field: &'static str) -> SourceResult<i64> {
        match self {
            WireAmount::Micros(v) => Ok(*v),
            WireAmount::Decimal(s) => {
                parse_micros(s).map_err(|source| SourceError::Amount { field, source })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrder {
    pub price: WireAmount,
    pub quantity: WireAmount,
    pub escrow_id: String,
    pub owner: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBook {
    #[serde(default)]
    pub yes_bids: Vec<WireOrder>,
    #[serde(default)]
    pub yes_asks: Vec<WireOrder>,
    #[serde(default)]
    pub no_bids: Vec<WireOrder>,
    #[serde(default)]
    pub no_asks: Vec<WireOrder>,
}

impl WireOrder {
    fn into_raw(self) -> SourceResult<RawOrderEntry> {
        Ok(RawOrderEntry {
            price: self.price.to_micros("price")?,
            quantity: self.quantity.to_micros("quantity")?,
            escrow_id: self.escrow_id,
            owner: self.owner,
        })
    }
}

fn convert_side(side: Vec<WireOrder>) -> SourceResult<Vec<RawOrderEntry>> {
    side.into_iter().map(WireOrder::into_raw).collect()
}

impl TryFrom<WireBook> for RawBook {
    type Error = SourceError;

    fn try_from(wire: WireBook) -> SourceResult<Self> {
        Ok(RawBook {
            yes_bids: convert_side(wire.yes_bids)?,
            yes_asks: convert_side(wire.yes_asks)?,
            no_bids: convert_side(wire.no_bids)?,
            no_asks: convert_side(wire.no_asks)?,
        })
    }
}

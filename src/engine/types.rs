use serde::{Deserialize, Serialize};

/// One full unit in micro-units: $1.00 of price, or 1 share of quantity.
pub const PRICE_SCALE: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

// Resting order on one side of one outcome token, as reported by the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderEntry {
    pub price: i64,
    pub quantity: i64,
    pub escrow_id: String,
    pub owner: String,
}

impl RawOrderEntry {
    pub fn new(
        price: i64,
        quantity: i64,
        escrow_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self { price, quantity, escrow_id: escrow_id.into(), owner: owner.into() }
    }
}

/// Four independent sides of a binary market. No ordering or uniqueness is assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBook {
    #[serde(default)]
    pub yes_bids: Vec<RawOrderEntry>,
    #[serde(default)]
    pub yes_asks: Vec<RawOrderEntry>,
    #[serde(default)]
    pub no_bids: Vec<RawOrderEntry>,
    #[serde(default)]
    pub no_asks: Vec<RawOrderEntry>,
}

impl RawBook {
    pub fn total_orders(&self) -> usize {
        self.yes_bids.len() + self.yes_asks.len() + self.no_bids.len() + self.no_asks.len()
    }
}

/// Which raw side produced a unified entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    YesBid,
    YesAsk,
    NoBidAsYesAsk,
    NoAskAsYesBid,
}

impl Origin {
    pub fn of(outcome: Outcome, side: Side) -> Self {
        match (outcome, side) {
            (Outcome::Yes, Side::Bid) => Origin::YesBid,
            (Outcome::Yes, Side::Ask) => Origin::YesAsk,
            (Outcome::No, Side::Bid) => Origin::NoBidAsYesAsk,
            (Outcome::No, Side::Ask) => Origin::NoAskAsYesBid,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Origin::YesBid | Origin::YesAsk => Outcome::Yes,
            Origin::NoBidAsYesAsk | Origin::NoAskAsYesBid => Outcome::No,
        }
    }

    pub fn is_complemented(&self) -> bool {
        self.outcome() == Outcome::No
    }
}

/// `PRICE_SCALE - price`. Wraps instead of panicking on malformed extremes.
pub fn complement_price(price: i64) -> i64 {
    PRICE_SCALE.wrapping_sub(price)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedEntry {
    pub yes_price: i64,
    pub quantity: i64,
    pub escrow_id: String,
    pub owner: String,
    pub origin: Origin,
}

impl UnifiedEntry {
    pub fn from_raw(raw: &RawOrderEntry, origin: Origin) -> Self {
        let yes_price = if origin.is_complemented() {
            complement_price(raw.price)
        } else {
            raw.price
        };
        Self {
            yes_price,
            quantity: raw.quantity,
            escrow_id: raw.escrow_id.clone(),
            owner: raw.owner.clone(),
            origin,
        }
    }

    /// Price as quoted on the raw side that produced this entry.
    pub fn source_price(&self) -> i64 {
        if self.origin.is_complemented() {
            complement_price(self.yes_price)
        } else {
            self.yes_price
        }
    }
}

/// Aggregated price level of the unified view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthLevel {
    pub yes_price: i64,
    pub quantity: i64,
    pub orders: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedBook {
    pub asks: Vec<UnifiedEntry>, // lowest yes_price = best ask
    pub bids: Vec<UnifiedEntry>, // highest yes_price = best bid
    pub spread: Option<i64>,
    pub total_orders: usize,
}

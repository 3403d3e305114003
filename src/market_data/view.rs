use serde::Serialize;

use crate::engine::types::{Origin, UnifiedBook, UnifiedEntry};
use crate::market_data::normaliser::format_micros;

/// Presentation form of one unified entry: exact micro-units plus display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub price: String,
    pub price_micros: i64,
    pub quantity: String,
    pub quantity_micros: i64,
    pub escrow_id: String,
    pub owner: String,
    pub origin: Origin,
}

impl From<&UnifiedEntry> for EntryView {
    fn from(entry: &UnifiedEntry) -> Self {
        Self {
            price: format_micros(entry.yes_price),
            price_micros: entry.yes_price,
            quantity: format_micros(entry.quantity),
            quantity_micros: entry.quantity,
            escrow_id: entry.escrow_id.clone(),
            owner: entry.owner.clone(),
            origin: entry.origin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookView {
    pub market_id: String,
    pub asks: Vec<EntryView>,
    pub bids: Vec<EntryView>,
    pub spread: Option<String>,
    pub spread_micros: Option<i64>,
    pub mid_price: Option<String>,
    pub total_orders: usize,
    pub crossed: bool,
}

impl OrderbookView {
    /// `depth` caps the entries shown per side; `total_orders` stays the raw count.
    pub fn render(market_id: &str, book: &UnifiedBook, depth: Option<usize>) -> Self {
        let limit = depth.unwrap_or(usize::MAX);
        Self {
            market_id: market_id.to_string(),
            asks: book.asks.iter().take(limit).map(EntryView::from).collect(),
            bids: book.bids.iter().take(limit).map(EntryView::from).collect(),
            spread: book.spread.map(format_micros),
            spread_micros: book.spread,
            mid_price: book.mid_price().map(format_micros),
            total_orders: book.total_orders,
            crossed: book.is_crossed(),
        }
    }
}

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::engine::types::{
    DepthLevel, Origin, Outcome, RawBook, RawOrderEntry, Side, UnifiedBook, UnifiedEntry,
};

/// Fold the four raw sides into one YES-denominated book.
///
/// NO bids become YES asks and NO asks become YES bids at the complement
/// price. Both sides are stable-sorted, so equal prices keep candidate order
/// (native YES entries first, then the complemented NO entries, each in input
/// order). Entries are never filtered, validated or deduplicated.
#[instrument(level = "debug", skip(book), fields(
    yes_bids = book.yes_bids.len(),
    yes_asks = book.yes_asks.len(),
    no_bids = book.no_bids.len(),
    no_asks = book.no_asks.len(),
))]
pub fn unify(book: &RawBook) -> UnifiedBook {
    let mut asks = candidates(&book.yes_asks, Origin::of(Outcome::Yes, Side::Ask))
        .chain(candidates(&book.no_bids, Origin::of(Outcome::No, Side::Bid)))
        .collect::<Vec<_>>();
    let mut bids = candidates(&book.yes_bids, Origin::of(Outcome::Yes, Side::Bid))
        .chain(candidates(&book.no_asks, Origin::of(Outcome::No, Side::Ask)))
        .collect::<Vec<_>>();

    // sort_by is stable
    asks.sort_by(|a, b| a.yes_price.cmp(&b.yes_price));
    bids.sort_by(|a, b| b.yes_price.cmp(&a.yes_price));

    let spread = match (asks.first(), bids.first()) {
        (Some(ask), Some(bid)) => {
            let spread = ask.yes_price.wrapping_sub(bid.yes_price);
            trace!(best_ask = ask.yes_price, best_bid = bid.yes_price, spread, "Calculated spread");
            Some(spread)
        }
        _ => {
            trace!("One side empty, spread unavailable");
            None
        }
    };

    let total_orders = book.total_orders();
    debug!(asks = asks.len(), bids = bids.len(), total_orders, ?spread, "Unified book");
    metrics::counter!("unibook_unify_total").increment(1);
    metrics::histogram!("unibook_unified_orders").record(total_orders as f64);

    UnifiedBook { asks, bids, spread, total_orders }
}

fn candidates(side: &[RawOrderEntry], origin: Origin) -> impl Iterator<Item = UnifiedEntry> + '_ {
    side.iter().map(move |raw| UnifiedEntry::from_raw(raw, origin))
}

impl UnifiedBook {
    pub fn best_ask(&self) -> Option<&UnifiedEntry> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&UnifiedEntry> {
        self.bids.first()
    }

    /// Floor of the mean of best ask and best bid.
    pub fn mid_price(&self) -> Option<i64> {
        let ask = self.best_ask()?.yes_price as i128;
        let bid = self.best_bid()?.yes_price as i128;
        Some((ask + bid).div_euclid(2) as i64)
    }

    pub fn is_crossed(&self) -> bool {
        matches!(self.spread, Some(spread) if spread < 0)
    }

    /// Top `n` price levels per side as (asks, bids).
    pub fn depth(&self, n: usize) -> (Vec<DepthLevel>, Vec<DepthLevel>) {
        (aggregate(&self.asks, n), aggregate(&self.bids, n))
    }
}

// Entries are already sorted, so equal prices are adjacent.
fn aggregate(entries: &[UnifiedEntry], n: usize) -> Vec<DepthLevel> {
    let chunks = entries.iter().chunk_by(|entry| entry.yes_price);
    let levels = chunks
        .into_iter()
        .take(n)
        .map(|(yes_price, level)| {
            let (quantity, orders) = level.fold((0i64, 0usize), |(qty, count), entry| {
                (qty.saturating_add(entry.quantity), count + 1)
            });
            DepthLevel { yes_price, quantity, orders }
        })
        .collect();
    levels
}

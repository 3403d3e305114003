//! Property tests for the four-sided -> YES-denominated unification.

use proptest::prelude::*;
use unibook_rs::engine::{unify, Origin, RawBook, RawOrderEntry, UnifiedEntry, PRICE_SCALE};

fn entry_strategy() -> impl Strategy<Value = RawOrderEntry> {
    // Mostly in-range prices, with a tail of out-of-domain values
    let price = prop_oneof![
        8 => 0..=PRICE_SCALE,
        1 => -PRICE_SCALE..0,
        1 => PRICE_SCALE..3 * PRICE_SCALE,
    ];
    (price, 1i64..10_000_000, 0u32..50, "[a-z]{1,6}")
        .prop_map(|(price, quantity, escrow, owner)| {
            RawOrderEntry::new(price, quantity, format!("esc-{escrow}"), owner)
        })
}

fn book_strategy() -> impl Strategy<Value = RawBook> {
    let side = || prop::collection::vec(entry_strategy(), 0..20);
    (side(), side(), side(), side()).prop_map(|(yes_bids, yes_asks, no_bids, no_asks)| RawBook {
        yes_bids,
        yes_asks,
        no_bids,
        no_asks,
    })
}

// Multiset of (escrow, owner, quantity, origin) so every raw entry can be matched back
fn keys(entries: &[UnifiedEntry]) -> Vec<(String, String, i64, Origin, i64)> {
    let mut keys: Vec<_> = entries
        .iter()
        .map(|e| (e.escrow_id.clone(), e.owner.clone(), e.quantity, e.origin, e.source_price()))
        .collect();
    keys.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));
    keys
}

fn yes_prices(entries: &[UnifiedEntry], origin: Origin) -> Vec<i64> {
    entries.iter().filter(|e| e.origin == origin).map(|e| e.yes_price).collect()
}

fn raw_keys(side: &[RawOrderEntry], origin: Origin) -> Vec<(String, String, i64, Origin, i64)> {
    side.iter()
        .map(|r| (r.escrow_id.clone(), r.owner.clone(), r.quantity, origin, r.price))
        .collect()
}

proptest! {
    #[test]
    fn conservation(book in book_strategy()) {
        let unified = unify(&book);
        let raw_total =
            book.yes_bids.len() + book.yes_asks.len() + book.no_bids.len() + book.no_asks.len();
        prop_assert_eq!(unified.asks.len() + unified.bids.len(), raw_total);
        prop_assert_eq!(unified.total_orders, raw_total);
        prop_assert_eq!(unified.asks.len(), book.yes_asks.len() + book.no_bids.len());
        prop_assert_eq!(unified.bids.len(), book.yes_bids.len() + book.no_asks.len());
    }

    #[test]
    fn every_raw_entry_maps_once(book in book_strategy()) {
        let unified = unify(&book);

        let mut expected_asks = raw_keys(&book.yes_asks, Origin::YesAsk);
        expected_asks.extend(raw_keys(&book.no_bids, Origin::NoBidAsYesAsk));
        expected_asks.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));
        prop_assert_eq!(keys(&unified.asks), expected_asks);

        let mut expected_bids = raw_keys(&book.yes_bids, Origin::YesBid);
        expected_bids.extend(raw_keys(&book.no_asks, Origin::NoAskAsYesBid));
        expected_bids.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));
        prop_assert_eq!(keys(&unified.bids), expected_bids);
    }

    #[test]
    fn complement_and_pass_through(book in book_strategy()) {
        let unified = unify(&book);
        let cases = [
            (Origin::YesAsk, &book.yes_asks, false),
            (Origin::NoBidAsYesAsk, &book.no_bids, true),
            (Origin::YesBid, &book.yes_bids, false),
            (Origin::NoAskAsYesBid, &book.no_asks, true),
        ];
        for (origin, raw, complemented) in cases {
            let mut got = yes_prices(&unified.asks, origin);
            got.extend(yes_prices(&unified.bids, origin));
            got.sort_unstable();
            let mut expected: Vec<i64> = raw
                .iter()
                .map(|r| if complemented { PRICE_SCALE - r.price } else { r.price })
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn sides_are_sorted(book in book_strategy()) {
        let unified = unify(&book);
        prop_assert!(unified.asks.windows(2).all(|w| w[0].yes_price <= w[1].yes_price));
        prop_assert!(unified.bids.windows(2).all(|w| w[0].yes_price >= w[1].yes_price));
    }

    #[test]
    fn deterministic(book in book_strategy()) {
        prop_assert_eq!(unify(&book), unify(&book.clone()));
    }

    #[test]
    fn spread_present_iff_both_sides(book in book_strategy()) {
        let unified = unify(&book);
        match (unified.asks.first(), unified.bids.first()) {
            (Some(ask), Some(bid)) => {
                prop_assert_eq!(unified.spread, Some(ask.yes_price - bid.yes_price))
            }
            _ => prop_assert_eq!(unified.spread, None),
        }
    }
}

#[test]
fn spread_example() {
    let book = RawBook {
        yes_asks: vec![RawOrderEntry::new(600_000, 1_000_000, "ya", "a")],
        no_bids: vec![RawOrderEntry::new(350_000, 2_000_000, "nb", "b")],
        yes_bids: vec![RawOrderEntry::new(480_000, 1_000_000, "yb", "c")],
        no_asks: vec![],
    };
    let unified = unify(&book);
    let asks: Vec<_> = unified.asks.iter().map(|e| e.yes_price).collect();
    let bids: Vec<_> = unified.bids.iter().map(|e| e.yes_price).collect();
    assert_eq!(asks, vec![600_000, 650_000]);
    assert_eq!(bids, vec![480_000]);
    assert_eq!(unified.spread, Some(120_000));
}

#[test]
fn boundary_prices() {
    let book = RawBook {
        no_bids: vec![RawOrderEntry::new(0, 1, "nb", "a")],
        no_asks: vec![RawOrderEntry::new(PRICE_SCALE, 1, "na", "b")],
        ..Default::default()
    };
    let unified = unify(&book);
    assert_eq!(unified.asks[0].yes_price, 1_000_000);
    assert_eq!(unified.bids[0].yes_price, 0);
}

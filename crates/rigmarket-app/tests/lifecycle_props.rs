// Rust guideline compliant 2026-10-12

//! Property-based tests for lifecycle invariants under arbitrary operation
//! sequences.

mod common;

use common::{alice, bob, gpu, harness};
use proptest::prelude::*;
use rigmarket_app::{Identity, ListOptions};
use rigmarket_core::{Clock, ListingPatch};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Op {
    Create(bool),
    Sell(usize, bool),
    Delete(usize, bool),
    Edit(usize, u32),
    View(usize),
    Advance(i64),
    Sweep,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Create),
        (0usize..8, any::<bool>()).prop_map(|(i, owner)| Op::Sell(i, owner)),
        (0usize..8, any::<bool>()).prop_map(|(i, owner)| Op::Delete(i, owner)),
        (0usize..8, 0u32..1_000).prop_map(|(i, price)| Op::Edit(i, price)),
        (0usize..8).prop_map(Op::View),
        (1i64..120).prop_map(Op::Advance),
        Just(Op::Sweep),
    ]
}

fn requester(owner: bool) -> Identity {
    if owner {
        alice()
    } else {
        bob()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After every operation: nothing stored is both sold and active, the
    /// public feed holds only live listings, and nothing purge-due is readable.
    #[test]
    fn prop_lifecycle_invariants_hold(ops in prop::collection::vec(arb_op(), 1..40)) {
        let h = harness();
        let mut ids: Vec<String> = Vec::new();

        for op in ops {
            let pick = |i: usize| ids.get(i % ids.len().max(1)).cloned();
            match op {
                Op::Create(boosted) => {
                    let mut input = gpu("Card", 100);
                    input.is_boosted = boosted;
                    ids.push(h.market.create_listing(&alice(), input).unwrap().id);
                }
                Op::Sell(i, owner) => {
                    if let Some(id) = pick(i) {
                        let _ = h.market.mark_sold(&id, &requester(owner));
                    }
                }
                Op::Delete(i, owner) => {
                    if let Some(id) = pick(i) {
                        let _ = h.market.soft_delete(&id, &requester(owner));
                    }
                }
                Op::Edit(i, price) => {
                    if let Some(id) = pick(i) {
                        let patch = ListingPatch {
                            price: Some(Decimal::from(price)),
                            ..ListingPatch::default()
                        };
                        let _ = h.market.update_listing(&id, &alice(), &patch);
                    }
                }
                Op::View(i) => {
                    if let Some(id) = pick(i) {
                        h.market.increment_view(&id);
                    }
                }
                Op::Advance(secs) => {
                    h.clock.advance(secs);
                }
                Op::Sweep => {
                    h.market.sweep_now().unwrap();
                }
            }

            let now = h.clock.now();
            for listing in h.market.all_listings().unwrap() {
                prop_assert!(!(listing.is_sold && listing.is_active));
            }

            let feed = h.market.list_listings(&ListOptions {
                limit: Some(100),
                ..ListOptions::default()
            }).unwrap();
            for listing in &feed.items {
                prop_assert!(listing.is_publicly_visible(now));
            }

            for id in &ids {
                if let Ok(listing) = h.market.get_listing(id) {
                    prop_assert!(!listing.is_purge_due(now));
                }
            }
        }
    }

    /// Sold listings stay sold whatever happens afterwards.
    #[test]
    fn prop_sale_is_permanent(ops in prop::collection::vec(arb_op(), 0..20)) {
        let h = harness();
        let id = h.market.create_listing(&alice(), gpu("Card", 100)).unwrap().id;
        h.market.mark_sold(&id, &alice()).unwrap();

        for op in ops {
            match op {
                Op::Delete(_, owner) => { let _ = h.market.soft_delete(&id, &requester(owner)); }
                Op::Sell(_, owner) => { let _ = h.market.mark_sold(&id, &requester(owner)); }
                Op::Edit(_, price) => {
                    let patch = ListingPatch {
                        price: Some(Decimal::from(price)),
                        ..ListingPatch::default()
                    };
                    let _ = h.market.update_listing(&id, &alice(), &patch);
                }
                Op::Sweep => { h.market.sweep_now().unwrap(); }
                Op::Create(_) | Op::View(_) | Op::Advance(_) => {}
            }
            if let Ok(listing) = h.market.get_listing(&id) {
                prop_assert!(listing.is_sold);
                prop_assert!(!listing.is_active);
            }
        }
    }
}

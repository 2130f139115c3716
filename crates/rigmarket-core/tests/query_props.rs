// Rust guideline compliant 2026-10-12

//! Property-based tests for query execution.
//!
//! These tests validate ordering and paging for arbitrary result sets: boosted
//! listings always lead, ties break deterministically, and consecutive pages
//! partition the matches.

use rigmarket_core::{Condition, Listing, ListingQuery, Predicate, SortOrder};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_sort() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::PriceLow),
        Just(SortOrder::PriceHigh),
        Just(SortOrder::Oldest),
        Just(SortOrder::Newest),
    ]
}

fn arb_listings() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec((0u32..50, 0i64..20, any::<bool>()), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (price, created_at, is_boosted))| Listing {
                id: format!("lst-{:08x}", i),
                title: format!("Listing {}", i),
                description: String::new(),
                category: "cooling".to_string(),
                brand: "Noctua".to_string(),
                model: "NH-D15".to_string(),
                condition: Condition::Used,
                price: Decimal::from(price),
                location: "Ghent".to_string(),
                images: Vec::new(),
                seller_id: "user-1".to_string(),
                is_active: true,
                is_sold: false,
                created_at,
                updated_at: created_at,
                expires_at: None,
                deleted_at: None,
                is_boosted,
                views: 0,
            })
            .collect()
    })
}

fn run(listings: Vec<Listing>, sort: SortOrder, offset: usize, limit: usize) -> Vec<Listing> {
    ListingQuery {
        predicate: Predicate::all(),
        sort,
        offset,
        limit,
    }
    .execute(listings)
    .items
}

proptest! {
    /// Boosted listings precede unboosted ones under every order.
    #[test]
    fn prop_boosted_first(listings in arb_listings(), sort in arb_sort()) {
        let items = run(listings, sort, 0, usize::MAX);
        let first_plain = items.iter().position(|l| !l.is_boosted).unwrap_or(items.len());
        prop_assert!(items[first_plain..].iter().all(|l| !l.is_boosted));
    }

    /// Adjacent results never compare out of order, ID included.
    #[test]
    fn prop_order_is_strict(listings in arb_listings(), sort in arb_sort()) {
        let items = run(listings, sort, 0, usize::MAX);
        for pair in items.windows(2) {
            prop_assert_eq!(sort.compare(&pair[0], &pair[1]), std::cmp::Ordering::Less);
        }
    }

    /// Pages of any size partition the full ordered result.
    #[test]
    fn prop_pages_partition_results(
        listings in arb_listings(),
        sort in arb_sort(),
        limit in 1usize..15,
    ) {
        let full = run(listings.clone(), sort, 0, usize::MAX);
        let mut stitched = Vec::new();
        let mut offset = 0;
        while offset < full.len() {
            stitched.extend(run(listings.clone(), sort, offset, limit));
            offset += limit;
        }
        prop_assert_eq!(stitched, full);
    }
}

// Rust guideline compliant 2026-10-12

//! Integration tests for owner-facing listing mutations.

mod common;

use common::{alice, bob, gpu, harness};
use rigmarket_app::{AppError, ErrorCode, EventKind};
use rigmarket_core::{Clock, Error, ListingPatch, ListingState, NewListing};
use rust_decimal::Decimal;

fn code(result: Result<impl std::fmt::Debug, AppError>) -> ErrorCode {
    match result {
        Err(e) => e.code(),
        Ok(v) => panic!("expected an error, got {:?}", v),
    }
}

#[test]
fn test_create_computes_lifecycle_fields() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    assert!(listing.is_active);
    assert!(!listing.is_sold);
    assert_eq!(listing.seller_id, "user-alice");
    assert_eq!(listing.created_at, 1_000_000);
    assert_eq!(listing.expires_at, Some(1_000_180));
    assert_eq!(listing.deleted_at, Some(1_000_300));
    assert_eq!(listing.views, 0);
}

#[test]
fn test_create_requires_fields() {
    let h = harness();
    let missing_price = NewListing {
        price: None,
        ..gpu("RTX 3080", 0)
    };
    match h.market.create_listing(&alice(), missing_price) {
        Err(AppError::Core(Error::Validation { field, .. })) => assert_eq!(field, "price"),
        other => panic!("expected validation error, got {:?}", other),
    }

    let unknown_category = NewListing {
        category: "spaceship".to_string(),
        ..gpu("RTX 3080", 10)
    };
    assert_eq!(
        code(h.market.create_listing(&alice(), unknown_category)),
        ErrorCode::NotFound
    );
}

#[test]
fn test_identical_inputs_get_distinct_ids() {
    let h = harness();
    let a = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    let b = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_not_found_precedes_forbidden() {
    let h = harness();
    assert_eq!(
        code(h.market.mark_sold("lst-00000000", &bob())),
        ErrorCode::NotFound
    );
    assert_eq!(
        code(h.market.soft_delete("lst-00000000", &bob())),
        ErrorCode::NotFound
    );
}

#[test]
fn test_non_owner_is_forbidden_without_details() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();

    let err = h.market.mark_sold(&listing.id, &bob()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Forbidden);
    assert!(!err.to_string().contains("alice"));
    assert!(err.details().is_none());

    let patch = ListingPatch {
        price: Some(Decimal::from(1)),
        ..ListingPatch::default()
    };
    assert_eq!(
        code(h.market.update_listing(&listing.id, &bob(), &patch)),
        ErrorCode::Forbidden
    );
    assert_eq!(code(h.market.soft_delete(&listing.id, &bob())), ErrorCode::Forbidden);

    let unchanged = h.market.get_listing(&listing.id).unwrap();
    assert!(unchanged.is_active);
    assert_eq!(unchanged.price, Decimal::from(450));
}

#[test]
fn test_mark_sold_once() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    h.clock.advance(5);

    let sold = h.market.mark_sold(&listing.id, &alice()).unwrap();
    assert!(sold.is_sold);
    assert!(!sold.is_active);
    assert_eq!(sold.updated_at, 1_000_005);

    assert_eq!(code(h.market.mark_sold(&listing.id, &alice())), ErrorCode::Conflict);
}

#[test]
fn test_soft_delete_is_idempotent_and_keeps_sold() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();

    h.market.soft_delete(&listing.id, &alice()).unwrap();
    h.market.soft_delete(&listing.id, &alice()).unwrap();
    let deleted = h.market.get_listing(&listing.id).unwrap();
    assert!(!deleted.is_active);
    assert!(!deleted.is_sold);

    let other = h.market.create_listing(&alice(), gpu("RX 6800", 350)).unwrap();
    h.market.mark_sold(&other.id, &alice()).unwrap();
    h.market.soft_delete(&other.id, &alice()).unwrap();
    assert!(h.market.get_listing(&other.id).unwrap().is_sold);
}

#[test]
fn test_update_merges_and_is_allowed_after_sale() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    h.market.mark_sold(&listing.id, &alice()).unwrap();
    h.clock.advance(30);

    let patch = ListingPatch {
        title: Some("RTX 3080 (sold)".to_string()),
        images: Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
        ..ListingPatch::default()
    };
    let updated = h.market.update_listing(&listing.id, &alice(), &patch).unwrap();
    assert_eq!(updated.title, "RTX 3080 (sold)");
    assert_eq!(updated.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    assert_eq!(updated.category, listing.category);
    assert_eq!(updated.created_at, listing.created_at);
    assert_eq!(updated.expires_at, listing.expires_at);
    assert!(updated.is_sold);
    assert!(!updated.is_active);
    assert_eq!(updated.updated_at, 1_000_030);
}

#[test]
fn test_update_rejects_invalid_fields() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    let patch = ListingPatch {
        price: Some(Decimal::from(-3)),
        ..ListingPatch::default()
    };
    match h.market.update_listing(&listing.id, &alice(), &patch) {
        Err(AppError::Core(Error::Validation { field, .. })) => assert_eq!(field, "price"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_get_hides_purge_due_listings_before_sweep() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();

    h.clock.advance(200);
    let expired = h.market.get_listing(&listing.id).unwrap();
    assert_eq!(expired.state(h.clock.now()), ListingState::Expired);

    h.clock.advance(100);
    assert_eq!(code(h.market.get_listing(&listing.id)), ErrorCode::NotFound);
    assert_eq!(code(h.market.mark_sold(&listing.id, &alice())), ErrorCode::NotFound);
}

#[test]
fn test_views_count_and_never_fail() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    assert_eq!(h.market.increment_view(&listing.id), Some(1));
    assert_eq!(h.market.increment_view(&listing.id), Some(2));
    assert_eq!(h.market.increment_view("lst-ffffffff"), None);
}

#[test]
fn test_events_follow_mutations() {
    let h = harness();
    let mut rx = h.events.subscribe();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    h.market.mark_sold(&listing.id, &alice()).unwrap();
    h.market.soft_delete(&listing.id, &alice()).unwrap();

    let first = rx.try_recv().unwrap();
    assert_eq!((first.kind, first.state), (EventKind::Created, ListingState::Active));
    let second = rx.try_recv().unwrap();
    assert_eq!((second.kind, second.state), (EventKind::Sold, ListingState::Sold));
    // Soft delete of a sold listing changes nothing and emits nothing.
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_rejected_mutations_emit_nothing() {
    let h = harness();
    let listing = h.market.create_listing(&alice(), gpu("RTX 3080", 450)).unwrap();
    let mut rx = h.events.subscribe();
    let _ = h.market.mark_sold(&listing.id, &bob());
    assert!(rx.try_recv().is_err());
}

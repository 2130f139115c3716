// Rust guideline compliant 2026-10-12

//! Unit tests for the lifecycle FSM.
//!
//! These tests validate specific transitions, time-derived states and the
//! in-place transition helpers.

use rigmarket_core::fsm::{apply_deactivate, apply_sold};
use rigmarket_core::{validate_transition, Condition, Error, Listing, ListingState};
use rust_decimal::Decimal;

fn listing(now: i64) -> Listing {
    Listing {
        id: "lst-0a1b2c3d".to_string(),
        title: "Ryzen 7 5800X".to_string(),
        description: "Boxed, with cooler".to_string(),
        category: "cpu".to_string(),
        brand: "AMD".to_string(),
        model: "5800X".to_string(),
        condition: Condition::Used,
        price: Decimal::new(19900, 2),
        location: "Munich".to_string(),
        images: vec!["front.jpg".to_string()],
        seller_id: "user-1".to_string(),
        is_active: true,
        is_sold: false,
        created_at: now,
        updated_at: now,
        expires_at: Some(now + 180),
        deleted_at: Some(now + 300),
        is_boosted: false,
        views: 0,
    }
}

#[test]
fn test_active_to_sold() {
    assert!(ListingState::Active.can_transition_to(ListingState::Sold).is_ok());
}

#[test]
fn test_sold_twice_is_conflict() {
    assert!(ListingState::Sold.can_transition_to(ListingState::Sold).is_err());
}

#[test]
fn test_inactive_and_expired_can_be_sold() {
    assert!(ListingState::Inactive.can_transition_to(ListingState::Sold).is_ok());
    assert!(ListingState::Expired.can_transition_to(ListingState::Sold).is_ok());
}

#[test]
fn test_soft_delete_always_allowed_before_purge() {
    for state in [
        ListingState::Active,
        ListingState::Inactive,
        ListingState::Expired,
        ListingState::Sold,
    ] {
        assert!(
            state.can_transition_to(ListingState::Inactive).is_ok(),
            "{:?} should allow soft delete",
            state
        );
    }
}

#[test]
fn test_only_active_expires() {
    assert!(ListingState::Active.can_transition_to(ListingState::Expired).is_ok());
    assert!(ListingState::Inactive.can_transition_to(ListingState::Expired).is_err());
    assert!(ListingState::Sold.can_transition_to(ListingState::Expired).is_err());
}

#[test]
fn test_nothing_reactivates() {
    for state in [
        ListingState::Active,
        ListingState::Inactive,
        ListingState::Expired,
        ListingState::Sold,
    ] {
        assert!(state.can_transition_to(ListingState::Active).is_err());
    }
}

#[test]
fn test_purged_is_terminal() {
    assert!(ListingState::Purged.is_terminal());
    assert!(ListingState::Purged.valid_transitions().is_empty());
    assert!(ListingState::Purged
        .can_transition_to(ListingState::Inactive)
        .is_err());
}

#[test]
fn test_valid_transitions_agree_with_guard() {
    let all = [
        ListingState::Active,
        ListingState::Inactive,
        ListingState::Expired,
        ListingState::Sold,
        ListingState::Purged,
    ];
    for from in all {
        let valid = from.valid_transitions();
        for to in all {
            assert_eq!(
                valid.contains(&to),
                from.can_transition_to(to).is_ok(),
                "{:?} -> {:?}",
                from,
                to
            );
        }
    }
}

#[test]
fn test_three_and_five_minute_windows() {
    let listing = listing(0);
    assert_eq!(listing.state(179), ListingState::Active);
    assert_eq!(listing.state(180), ListingState::Expired);
    assert_eq!(listing.state(299), ListingState::Expired);
    assert_eq!(listing.state(300), ListingState::Purged);
}

#[test]
fn test_sale_after_expiry_but_before_purge() {
    let mut listing = listing(0);
    assert!(validate_transition(&listing, ListingState::Sold, 200).is_ok());
    apply_sold(&mut listing, 200);
    assert_eq!(listing.state(200), ListingState::Sold);
    assert!(validate_transition(&listing, ListingState::Sold, 201).is_err());
}

#[test]
fn test_deactivate_is_noop_on_inactive() {
    let mut listing = listing(0);
    apply_deactivate(&mut listing, 10);
    assert_eq!(listing.updated_at, 10);
    apply_deactivate(&mut listing, 20);
    assert_eq!(listing.updated_at, 10);
    assert_eq!(listing.state(20), ListingState::Inactive);
}

#[test]
fn test_rejections_explain_the_state() {
    match ListingState::Sold.can_transition_to(ListingState::Sold) {
        Err(Error::Conflict(message)) => assert_eq!(message, "Listing is already sold"),
        other => panic!("expected conflict, got {:?}", other),
    }
    match ListingState::Inactive.can_transition_to(ListingState::Expired) {
        Err(Error::Conflict(message)) => assert!(message.contains("Inactive")),
        other => panic!("expected conflict, got {:?}", other),
    }
    match ListingState::Purged.can_transition_to(ListingState::Purged) {
        Err(Error::Conflict(message)) => assert!(message.contains("permanently removed")),
        other => panic!("expected conflict, got {:?}", other),
    }
}

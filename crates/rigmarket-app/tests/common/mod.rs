// Rust guideline compliant 2026-10-12

//! Shared fixtures for application service tests.

#![allow(dead_code)]

use rigmarket_app::{BroadcastSink, Identity, Marketplace};
use rigmarket_core::{Condition, Config, ListingStore, ManualClock, MemoryStore, NewListing};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Three minutes to expiry, five to purge.
pub fn short_config() -> Config {
    Config {
        expire_after_secs: 180,
        delete_after_secs: 300,
        ..Config::default()
    }
}

pub struct Harness {
    pub market: Marketplace,
    pub clock: Arc<ManualClock>,
    pub store: Arc<dyn ListingStore>,
    pub events: BroadcastSink,
}

pub fn harness() -> Harness {
    harness_with(Arc::new(MemoryStore::new()))
}

pub fn harness_with(store: Arc<dyn ListingStore>) -> Harness {
    let clock = Arc::new(ManualClock::new(1_000_000));
    let events = BroadcastSink::new(1_024);
    let market = Marketplace::with_events(
        short_config(),
        Arc::clone(&store),
        clock.clone(),
        Arc::new(events.clone()),
    );
    Harness {
        market,
        clock,
        store,
        events,
    }
}

pub fn alice() -> Identity {
    Identity::new("user-alice", "alice@example.com", "alice")
}

pub fn bob() -> Identity {
    Identity::new("user-bob", "bob@example.com", "bob")
}

pub fn gpu(title: &str, price: i64) -> NewListing {
    NewListing {
        title: title.to_string(),
        description: "Used for gaming, never mined".to_string(),
        category: "gpu".to_string(),
        brand: "NVIDIA".to_string(),
        model: title.to_string(),
        condition: Some(Condition::Used),
        price: Some(Decimal::from(price)),
        location: "Berlin".to_string(),
        ..NewListing::default()
    }
}

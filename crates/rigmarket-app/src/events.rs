// Rust guideline compliant 2026-10-12

//! Listing lifecycle facts emitted after successful writes.
//!
//! Services never wait on delivery. A sink that cannot deliver drops the event.

use rigmarket_core::ListingState;
use serde::Serialize;
use tokio::sync::broadcast;

/// What happened to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A listing was created.
    Created,
    /// Owner-editable fields changed.
    Updated,
    /// The owner marked the listing sold.
    Sold,
    /// The owner soft-deleted the listing.
    Deactivated,
    /// A sweep deactivated the listing after `expires_at`.
    Expired,
    /// A sweep removed the listing after `deleted_at`.
    Purged,
}

/// A listing lifecycle fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEvent {
    /// Listing the fact is about.
    pub listing_id: String,
    /// What happened.
    pub kind: EventKind,
    /// Listing state after the change.
    pub state: ListingState,
    /// Unix timestamp of the change.
    pub at: i64,
}

impl ListingEvent {
    /// Creates an event.
    pub fn new(listing_id: impl Into<String>, kind: EventKind, state: ListingState, at: i64) -> Self {
        Self {
            listing_id: listing_id.into(),
            kind,
            state,
            at,
        }
    }
}

/// Receiver of listing events.
pub trait EventSink: Send + Sync {
    /// Delivers an event. Must not block.
    fn emit(&self, event: ListingEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: ListingEvent) {}
}

/// Sink that logs events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ListingEvent) {
        tracing::debug!(
            listing_id = %event.listing_id,
            kind = ?event.kind,
            state = ?event.state,
            at = event.at,
            "listing event"
        );
    }
}

/// Sink that fans events out to tokio broadcast subscribers.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<ListingEvent>,
}

impl BroadcastSink {
    /// Creates a sink buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Returns a new receiver for subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<ListingEvent> {
        self.tx.subscribe()
    }
}

impl EventSink for BroadcastSink {
    fn emit(&self, event: ListingEvent) {
        // No subscribers is not an error.
        let _ = self.tx.send(event);
    }
}

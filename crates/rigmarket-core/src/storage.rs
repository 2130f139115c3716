// Rust guideline compliant 2026-10-12

//! Listing store port and its implementations.
//!
//! The store is the only shared mutable resource. Every write that depends on
//! a listing's prior state goes through a conditional update, so concurrent
//! callers never need an external lock.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::query::{ListingQuery, Page};
use crate::{Listing, Result};

/// Result of a conditional update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The condition held and the change was written.
    Updated(Listing),
    /// The condition did not hold; nothing was written.
    Rejected(Listing),
    /// No listing with that ID exists.
    Missing,
}

/// Persistence contract for listings.
///
/// Implementations must make each method atomic with respect to every other
/// method on the same store.
pub trait ListingStore: Send + Sync {
    /// Inserts a new listing.
    ///
    /// # Errors
    ///
    /// Returns a conflict error if the ID is taken, or a validation error if
    /// the listing is invalid.
    fn insert(&self, listing: Listing) -> Result<()>;

    /// Fetches a listing by ID.
    fn get(&self, id: &str) -> Result<Option<Listing>>;

    /// Returns a snapshot of every stored listing.
    fn load_all(&self) -> Result<Vec<Listing>>;

    /// Applies `change` to the listing only if `condition` holds for its
    /// current state.
    ///
    /// The changed listing is validated before it is written; an invalid
    /// result is returned as an error and nothing is persisted.
    fn update_if(
        &self,
        id: &str,
        condition: &dyn Fn(&Listing) -> bool,
        change: &mut dyn FnMut(&mut Listing),
    ) -> Result<UpdateOutcome>;

    /// Atomically increments the view counter.
    ///
    /// Returns the post-increment value, or `None` if the listing is missing.
    fn increment_views(&self, id: &str) -> Result<Option<u64>>;

    /// Deactivates every active, unsold listing whose `expires_at` has been
    /// reached but whose `deleted_at` has not.
    ///
    /// Returns the IDs that were deactivated.
    fn deactivate_expired(&self, now: i64) -> Result<Vec<String>>;

    /// Removes every listing whose `deleted_at` has been reached, whatever its
    /// flags.
    ///
    /// Returns the IDs that were removed.
    fn purge_due(&self, now: i64) -> Result<Vec<String>>;

    /// Runs a planned query against a consistent snapshot.
    fn select(&self, query: &ListingQuery) -> Result<Page<Listing>>;
}

/// Shared bulk-deactivation step over a mutable snapshot.
fn deactivate_in_place<'a, I>(listings: I, now: i64) -> Vec<String>
where
    I: IntoIterator<Item = &'a mut Listing>,
{
    listings
        .into_iter()
        .filter(|listing| listing.is_due_for_deactivation(now))
        .map(|listing| {
            listing.is_active = false;
            listing.updated_at = now;
            listing.id.clone()
        })
        .collect()
}

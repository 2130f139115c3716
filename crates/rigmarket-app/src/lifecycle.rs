// Rust guideline compliant 2026-10-12

//! Owner-facing listing mutations.
//!
//! Every operation reads `now` once from the clock, checks existence and then
//! ownership with a single store read, and commits through a conditional store
//! write so that a concurrent change between the read and the write is caught
//! by the store rather than silently overwritten.

use crate::error::Result;
use crate::events::{EventKind, EventSink, ListingEvent};
use crate::session::Identity;
use rigmarket_core::fsm::{apply_deactivate, apply_sold};
use rigmarket_core::identity::generate_id;
use rigmarket_core::{
    validate_transition, Clock, Config, Error, Listing, ListingPatch, ListingState, ListingStore,
    NewListing, UpdateOutcome,
};
use std::sync::Arc;

/// Hash nonces tried before giving up on a colliding ID.
const MAX_ID_ATTEMPTS: u32 = 16;

/// Applies lifecycle transitions requested by listing owners.
pub struct LifecycleManager {
    store: Arc<dyn ListingStore>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventSink>,
    config: Arc<Config>,
}

impl LifecycleManager {
    /// Creates a manager over a store.
    ///
    /// # Arguments
    ///
    /// * `store` - Listing store shared with readers and the sweeper
    /// * `clock` - Source of `now`
    /// * `events` - Receiver of lifecycle facts
    /// * `config` - Expiry windows and category catalog
    pub fn new(
        store: Arc<dyn ListingStore>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            store,
            clock,
            events,
            config,
        }
    }

    /// Creates a listing owned by `seller`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field is missing or malformed (validation, naming the field)
    /// - The category is not in the catalog (not found)
    /// - No free ID could be generated (conflict)
    pub fn create(&self, seller: &Identity, input: NewListing) -> Result<Listing> {
        input.validate()?;

        let slug = input.category.trim().to_lowercase();
        let category = self
            .config
            .category(&slug)
            .ok_or_else(|| Error::CategoryNotFound(slug.clone()))?
            .slug
            .clone();

        let now = self.clock.now();
        for nonce in 0..MAX_ID_ATTEMPTS {
            let id = generate_id(&input.title, &seller.id, now, nonce);
            let listing = input.clone().into_listing(
                id,
                category.clone(),
                seller.id.clone(),
                now,
                self.config.expire_after_secs,
                self.config.delete_after_secs,
            )?;

            match self.store.insert(listing.clone()) {
                Ok(()) => {
                    self.emit(&listing, EventKind::Created, now);
                    return Ok(listing);
                }
                Err(Error::Conflict(_)) => {
                    tracing::debug!(id = %listing.id, nonce, "listing ID collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(Error::Conflict("could not allocate a unique listing ID".to_string()).into())
    }

    /// Fetches a listing by ID, including inactive and sold listings.
    ///
    /// # Errors
    ///
    /// Returns not found if the listing is absent or already due for purge.
    pub fn get(&self, id: &str) -> Result<Listing> {
        let now = self.clock.now();
        Ok(self.fetch_live(id, now)?)
    }

    /// Marks a listing sold.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence:
    /// - Not found if the listing is absent or due for purge
    /// - Forbidden if `requester` does not own it
    /// - Conflict if it is already sold
    pub fn mark_sold(&self, id: &str, requester: &Identity) -> Result<Listing> {
        let now = self.clock.now();
        let current = self.fetch_owned(id, requester, now)?;
        validate_transition(&current, ListingState::Sold, now)?;

        let outcome = self.store.update_if(
            id,
            &|l| !l.is_sold && !l.is_purge_due(now),
            &mut |l| apply_sold(l, now),
        )?;

        let listing = self.committed(id, outcome, now, "Listing is already sold")?;
        self.emit(&listing, EventKind::Sold, now);
        Ok(listing)
    }

    /// Soft-deletes a listing by clearing `is_active`.
    ///
    /// Repeating the call, or calling it on a sold listing, succeeds without
    /// changing anything. `is_sold` is never cleared.
    ///
    /// # Errors
    ///
    /// Returns not found or forbidden as for [`LifecycleManager::mark_sold`].
    pub fn soft_delete(&self, id: &str, requester: &Identity) -> Result<()> {
        let now = self.clock.now();
        let current = self.fetch_owned(id, requester, now)?;
        validate_transition(&current, ListingState::Inactive, now)?;

        if !current.is_active {
            tracing::debug!(id, "soft delete on inactive listing is a no-op");
            return Ok(());
        }

        let outcome = self.store.update_if(
            id,
            &|l| l.is_active && !l.is_purge_due(now),
            &mut |l| apply_deactivate(l, now),
        )?;

        match outcome {
            UpdateOutcome::Updated(listing) => {
                self.emit(&listing, EventKind::Deactivated, now);
                Ok(())
            }
            UpdateOutcome::Rejected(listing) if !listing.is_purge_due(now) => {
                tracing::debug!(id, "listing deactivated concurrently");
                Ok(())
            }
            UpdateOutcome::Rejected(_) | UpdateOutcome::Missing => {
                Err(Error::NotFound(id.to_string()).into())
            }
        }
    }

    /// Merges owner-editable fields into a listing.
    ///
    /// Allowed on sold and inactive listings. An empty patch returns the
    /// listing unchanged.
    ///
    /// # Errors
    ///
    /// Returns not found or forbidden as for [`LifecycleManager::mark_sold`],
    /// then a validation error naming the first bad field.
    pub fn update(&self, id: &str, requester: &Identity, patch: &ListingPatch) -> Result<Listing> {
        let now = self.clock.now();
        let current = self.fetch_owned(id, requester, now)?;
        patch.validate()?;

        if patch.is_empty() {
            return Ok(current);
        }

        let outcome = self.store.update_if(
            id,
            &|l| !l.is_purge_due(now),
            &mut |l| patch.apply(l, now),
        )?;

        let listing = self.committed(id, outcome, now, "Listing changed concurrently")?;
        self.emit(&listing, EventKind::Updated, now);
        Ok(listing)
    }

    /// Counts one view.
    ///
    /// Best-effort: store failures are logged and swallowed.
    ///
    /// # Returns
    ///
    /// The post-increment count, or `None` if the listing is missing or the
    /// store could not be reached.
    pub fn increment_view(&self, id: &str) -> Option<u64> {
        match self.store.increment_views(id) {
            Ok(views) => views,
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to count listing view");
                None
            }
        }
    }

    fn fetch_live(&self, id: &str, now: i64) -> rigmarket_core::Result<Listing> {
        self.store
            .get(id)?
            .filter(|listing| !listing.is_purge_due(now))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn fetch_owned(&self, id: &str, requester: &Identity, now: i64) -> Result<Listing> {
        let listing = self.fetch_live(id, now)?;
        if !listing.is_owned_by(&requester.id) {
            return Err(Error::Forbidden.into());
        }
        Ok(listing)
    }

    /// Maps a conditional write outcome to the committed listing.
    fn committed(
        &self,
        id: &str,
        outcome: UpdateOutcome,
        now: i64,
        conflict: &str,
    ) -> Result<Listing> {
        match outcome {
            UpdateOutcome::Updated(listing) => Ok(listing),
            UpdateOutcome::Rejected(listing) if !listing.is_purge_due(now) => {
                Err(Error::Conflict(conflict.to_string()).into())
            }
            UpdateOutcome::Rejected(_) | UpdateOutcome::Missing => {
                Err(Error::NotFound(id.to_string()).into())
            }
        }
    }

    fn emit(&self, listing: &Listing, kind: EventKind, now: i64) {
        self.events.emit(ListingEvent::new(
            listing.id.clone(),
            kind,
            listing.state(now),
            now,
        ));
    }
}

// Rust guideline compliant 2026-10-12

//! Marketplace service facade.
//!
//! Wires one store, clock, config and event sink into the lifecycle manager,
//! query planner and sweeper, and exposes the request-level operations.

use crate::error::Result;
use crate::events::{EventSink, NullSink};
use crate::lifecycle::LifecycleManager;
use crate::list::{ListOptions, ListingPage, QueryPlanner};
use crate::session::Identity;
use crate::sweep::{SweepHandle, SweepReport, SweepScheduler, Sweeper};
use rigmarket_core::{Category, Clock, Config, Listing, ListingPatch, ListingStore, NewListing};
use std::sync::Arc;
use std::time::Duration;

/// Request-level marketplace operations over a shared store.
pub struct Marketplace {
    config: Arc<Config>,
    store: Arc<dyn ListingStore>,
    clock: Arc<dyn Clock>,
    lifecycle: LifecycleManager,
    planner: QueryPlanner,
    sweeper: Arc<Sweeper>,
}

impl Marketplace {
    /// Creates a marketplace that discards lifecycle events.
    pub fn new(config: Config, store: Arc<dyn ListingStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_events(config, store, clock, Arc::new(NullSink))
    }

    /// Creates a marketplace that emits lifecycle events to `events`.
    pub fn with_events(
        config: Config,
        store: Arc<dyn ListingStore>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let config = Arc::new(config);
        let lifecycle = LifecycleManager::new(
            Arc::clone(&store),
            Arc::clone(&clock),
            Arc::clone(&events),
            Arc::clone(&config),
        );
        let planner = QueryPlanner::new(&config);
        let sweeper = Arc::new(Sweeper::new(Arc::clone(&store), Arc::clone(&clock), events));

        Self {
            config,
            store,
            clock,
            lifecycle,
            planner,
            sweeper,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the category catalog.
    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    /// Returns every stored listing, including purge-due rows not yet swept.
    ///
    /// Used for partial ID resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn all_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.store.load_all()?)
    }

    /// Creates a listing. See [`LifecycleManager::create`].
    ///
    /// # Errors
    ///
    /// Returns validation, not-found or conflict errors.
    pub fn create_listing(&self, seller: &Identity, input: NewListing) -> Result<Listing> {
        self.lifecycle.create(seller, input)
    }

    /// Fetches one listing by ID.
    ///
    /// # Errors
    ///
    /// Returns not found if absent or due for purge.
    pub fn get_listing(&self, id: &str) -> Result<Listing> {
        self.lifecycle.get(id)
    }

    /// Runs a discovery query at the current time.
    ///
    /// # Errors
    ///
    /// Returns validation errors for bad facets, or store errors.
    pub fn list_listings(&self, options: &ListOptions) -> Result<ListingPage> {
        let now = self.clock.now();
        self.planner.execute(self.store.as_ref(), options, now)
    }

    /// Applies an owner's partial edit.
    ///
    /// # Errors
    ///
    /// Returns not-found, forbidden or validation errors.
    pub fn update_listing(
        &self,
        id: &str,
        requester: &Identity,
        patch: &ListingPatch,
    ) -> Result<Listing> {
        self.lifecycle.update(id, requester, patch)
    }

    /// Marks a listing sold.
    ///
    /// # Errors
    ///
    /// Returns not-found, forbidden or conflict errors.
    pub fn mark_sold(&self, id: &str, requester: &Identity) -> Result<Listing> {
        self.lifecycle.mark_sold(id, requester)
    }

    /// Soft-deletes a listing.
    ///
    /// # Errors
    ///
    /// Returns not-found or forbidden errors.
    pub fn soft_delete(&self, id: &str, requester: &Identity) -> Result<()> {
        self.lifecycle.soft_delete(id, requester)
    }

    /// Counts a view; never fails.
    pub fn increment_view(&self, id: &str) -> Option<u64> {
        self.lifecycle.increment_view(id)
    }

    /// Runs one sweep immediately.
    ///
    /// # Errors
    ///
    /// Returns the store error if the sweep fails.
    pub fn sweep_now(&self) -> Result<SweepReport> {
        self.sweeper.run_once()
    }

    /// Starts the periodic sweep at the configured interval.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_sweeper(&self) -> SweepHandle {
        let period = Duration::from_secs(self.config.sweep_interval_secs);
        SweepScheduler::new(Arc::clone(&self.sweeper), period).spawn()
    }
}

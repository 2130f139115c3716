// Rust guideline compliant 2026-10-12

//! In-process listing store.

use super::{deactivate_in_place, ListingStore, UpdateOutcome};
use crate::query::{ListingQuery, Page};
use crate::{Error, Listing, Result};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Listing store held in memory behind a single reader-writer lock.
///
/// Each trait method takes the lock once, so conditional updates and bulk
/// sweeps are atomic with respect to each other.
#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: RwLock<HashMap<String, Listing>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with listings, skipping validation.
    ///
    /// Useful for legacy rows and fixtures.
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        let map = listings
            .into_iter()
            .map(|listing| (listing.id.clone(), listing))
            .collect();
        Self {
            listings: RwLock::new(map),
        }
    }

    /// Returns the number of stored listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Returns true if the store holds no listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Listing>>> {
        self.listings
            .read()
            .map_err(|_| Error::StoreUnavailable("listing lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Listing>>> {
        self.listings
            .write()
            .map_err(|_| Error::StoreUnavailable("listing lock poisoned".to_string()))
    }
}

impl ListingStore for MemoryStore {
    fn insert(&self, listing: Listing) -> Result<()> {
        listing.validate()?;
        let mut listings = self.write()?;
        if listings.contains_key(&listing.id) {
            return Err(Error::Conflict(format!(
                "Listing {} already exists",
                listing.id
            )));
        }
        listings.insert(listing.id.clone(), listing);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Listing>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn load_all(&self) -> Result<Vec<Listing>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn update_if(
        &self,
        id: &str,
        condition: &dyn Fn(&Listing) -> bool,
        change: &mut dyn FnMut(&mut Listing),
    ) -> Result<UpdateOutcome> {
        let mut listings = self.write()?;
        let Some(current) = listings.get_mut(id) else {
            return Ok(UpdateOutcome::Missing);
        };

        if !condition(current) {
            return Ok(UpdateOutcome::Rejected(current.clone()));
        }

        let mut next = current.clone();
        change(&mut next);
        next.validate()?;
        *current = next.clone();
        Ok(UpdateOutcome::Updated(next))
    }

    fn increment_views(&self, id: &str) -> Result<Option<u64>> {
        let mut listings = self.write()?;
        Ok(listings.get_mut(id).map(|listing| {
            listing.views = listing.views.saturating_add(1);
            listing.views
        }))
    }

    fn deactivate_expired(&self, now: i64) -> Result<Vec<String>> {
        let mut listings = self.write()?;
        Ok(deactivate_in_place(listings.values_mut(), now))
    }

    fn purge_due(&self, now: i64) -> Result<Vec<String>> {
        let mut listings = self.write()?;
        let due: Vec<String> = listings
            .values()
            .filter(|listing| listing.is_purge_due(now))
            .map(|listing| listing.id.clone())
            .collect();
        for id in &due {
            listings.remove(id);
        }
        Ok(due)
    }

    fn select(&self, query: &ListingQuery) -> Result<Page<Listing>> {
        let snapshot: Vec<Listing> = self.read()?.values().cloned().collect();
        Ok(query.execute(snapshot))
    }
}

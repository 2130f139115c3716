// Rust guideline compliant 2026-10-12

//! Finite State Machine module for listing lifecycle transitions.
//!
//! States are derived from a listing's flags and timestamps (see
//! [`Listing::state`]). The FSM enforces the following transitions:
//!
//! - Active, Inactive, Expired → Sold (one-way; selling twice is a conflict)
//! - Any live state → Inactive (soft delete; a no-op on Inactive and Sold)
//! - Active → Expired (sweep only)
//! - Any live state → Purged (sweep only, once `deleted_at` is reached)
//! - Nothing ever returns to Active, and nothing leaves Purged
//!
//! Guards here are advisory reads. The store's conditional writes are what make
//! concurrent transitions safe.

use crate::{Error, Listing, ListingState, Result};

impl ListingState {
    /// Checks if a transition to the target state is valid.
    ///
    /// # Errors
    ///
    /// Returns a conflict error if:
    /// - The listing is already purged
    /// - The listing is already sold and `target` is `Sold`
    /// - `target` is `Expired` and the listing is not active
    /// - `target` is `Active`
    pub fn can_transition_to(&self, target: ListingState) -> Result<()> {
        if self.is_terminal() {
            return Err(Error::Conflict(
                "Listing has been permanently removed".to_string(),
            ));
        }

        if self.valid_transitions().contains(&target) {
            return Ok(());
        }

        let message = match target {
            ListingState::Sold => "Listing is already sold".to_string(),
            ListingState::Expired => {
                format!("Only active listings expire, listing is {:?}", self)
            }
            _ => format!("Cannot transition from {:?} to {:?}", self, target),
        };
        Err(Error::Conflict(message))
    }

    /// Returns the list of valid target states for the current state.
    ///
    /// Inactive is listed for every live state since a repeated soft delete is
    /// a no-op rather than an error.
    pub fn valid_transitions(&self) -> Vec<ListingState> {
        match self {
            ListingState::Active => vec![
                ListingState::Inactive,
                ListingState::Expired,
                ListingState::Sold,
                ListingState::Purged,
            ],
            ListingState::Inactive | ListingState::Expired => vec![
                ListingState::Inactive,
                ListingState::Sold,
                ListingState::Purged,
            ],
            ListingState::Sold => vec![ListingState::Inactive, ListingState::Purged],
            ListingState::Purged => Vec::new(),
        }
    }

    /// Returns true if the state is terminal.
    pub fn is_terminal(&self) -> bool {
        *self == ListingState::Purged
    }
}

/// Validates a lifecycle transition for a listing at `now`.
///
/// # Errors
///
/// Returns an error if the derived state cannot move to `target`.
pub fn validate_transition(listing: &Listing, target: ListingState, now: i64) -> Result<()> {
    listing.state(now).can_transition_to(target)
}

/// Applies the "mark sold" transition to a listing in place.
///
/// Sets `is_sold` and clears `is_active` together so no observer sees a sold
/// listing that is still active.
pub fn apply_sold(listing: &mut Listing, now: i64) {
    listing.is_sold = true;
    listing.is_active = false;
    listing.updated_at = now;
}

/// Applies the soft-delete transition to a listing in place.
///
/// Leaves `is_sold` untouched.
pub fn apply_deactivate(listing: &mut Listing, now: i64) {
    if listing.is_active {
        listing.is_active = false;
        listing.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sold_clears_active() {
        let mut listing = crate::test_support::listing("lst-00000001", 1_000);
        apply_sold(&mut listing, 1_010);
        assert!(listing.is_sold);
        assert!(!listing.is_active);
        assert_eq!(listing.updated_at, 1_010);
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_apply_deactivate_keeps_sold_flag() {
        let mut listing = crate::test_support::listing("lst-00000001", 1_000);
        apply_sold(&mut listing, 1_010);
        apply_deactivate(&mut listing, 1_020);
        assert!(listing.is_sold);
        assert!(!listing.is_active);
        assert_eq!(listing.updated_at, 1_010);
    }

    #[test]
    fn test_validate_transition_uses_time() {
        let listing = crate::test_support::listing("lst-00000001", 1_000);
        let expires_at = listing.expires_at.unwrap_or_default();
        assert!(validate_transition(&listing, ListingState::Expired, expires_at).is_ok());
        let deleted_at = listing.deleted_at.unwrap_or_default();
        assert!(validate_transition(&listing, ListingState::Sold, deleted_at).is_err());
    }
}

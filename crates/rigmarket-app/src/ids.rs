// Rust guideline compliant 2026-10-12

//! ID resolution helpers for listings.

use crate::error::Result;
use rigmarket_core::{identity, Listing};

/// Resolves a partial listing ID to its canonical full ID.
///
/// # Arguments
///
/// * `partial` - Partial or full listing ID
/// * `listings` - Listings to match against
///
/// # Returns
///
/// The canonical listing ID.
///
/// # Errors
///
/// Returns an error if the partial ID is too short, ambiguous, or not found.
pub fn resolve_listing_id(partial: &str, listings: &[Listing]) -> Result<String> {
    Ok(identity::resolve_partial_id(partial, listings)?)
}

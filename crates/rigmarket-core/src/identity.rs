// Rust guideline compliant 2026-10-12

//! Hash-based listing identifiers.
//!
//! Listing IDs have the form `lst-` followed by eight lowercase hex characters
//! taken from a SHA-256 digest of the listing's title, seller and creation time.

use crate::{Error, Listing, Result};
use sha2::{Digest, Sha256};

/// Prefix shared by every listing ID.
pub const ID_PREFIX: &str = "lst-";

/// Number of hex characters following the prefix.
pub const ID_HEX_LEN: usize = 8;

/// Minimum number of hex characters accepted for partial ID resolution.
pub const MIN_PARTIAL_LEN: usize = 3;

/// Generates a listing ID.
///
/// # Arguments
///
/// * `title` - Listing title
/// * `seller_id` - Owner reference
/// * `timestamp` - Creation timestamp
/// * `nonce` - Collision counter, incremented by callers on clashes
pub fn generate_id(title: &str, seller_id: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(seller_id.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}{}", ID_PREFIX, &hex[..ID_HEX_LEN])
}

/// Validates the format of a full listing ID.
///
/// # Errors
///
/// Returns a validation error if the prefix or hex suffix is malformed.
pub fn validate_id_format(id: &str) -> Result<()> {
    let Some(hex) = id.strip_prefix(ID_PREFIX) else {
        return Err(Error::validation(
            "id",
            format!("'{}' must start with '{}'", id, ID_PREFIX),
        ));
    };

    let is_lower_hex = hex
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if hex.len() != ID_HEX_LEN || !is_lower_hex {
        return Err(Error::validation(
            "id",
            format!("'{}' must end with {} lowercase hex characters", id, ID_HEX_LEN),
        ));
    }

    Ok(())
}

/// Resolves a partial listing ID against a set of listings.
///
/// The `lst-` prefix is optional. At least [`MIN_PARTIAL_LEN`] hex characters
/// are required unless the input is a full ID.
///
/// # Errors
///
/// Returns an error if the partial is too short, matches nothing, or matches
/// more than one listing.
pub fn resolve_partial_id(partial: &str, listings: &[Listing]) -> Result<String> {
    let partial = partial.trim().to_lowercase();
    let hex = partial.strip_prefix(ID_PREFIX).unwrap_or(&partial);

    if hex.len() < MIN_PARTIAL_LEN {
        return Err(Error::validation(
            "id",
            format!("partial ID must have at least {} characters", MIN_PARTIAL_LEN),
        ));
    }

    let needle = format!("{}{}", ID_PREFIX, hex);
    let mut matches: Vec<String> = listings
        .iter()
        .filter(|listing| listing.id.starts_with(&needle))
        .map(|listing| listing.id.clone())
        .collect();

    match matches.len() {
        0 => Err(Error::NotFound(partial)),
        1 => Ok(matches.swap_remove(0)),
        _ => Err(Error::AmbiguousId(partial, matches)),
    }
}

// Rust guideline compliant 2026-10-12

//! Core data models for Rigmarket.

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical condition of a listed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Unopened or unused.
    New,
    /// Previously owned.
    Used,
    /// Restored by the manufacturer or a reseller.
    Refurbished,
}

impl Condition {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Refurbished => "refurbished",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            "refurbished" => Ok(Condition::Refurbished),
            other => Err(Error::validation(
                "condition",
                format!("'{}' is not one of new, used, refurbished", other),
            )),
        }
    }
}

/// Lifecycle state of a listing, derived from its flags and timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingState {
    /// Visible in the public feed.
    Active,
    /// Deactivated by its owner.
    Inactive,
    /// Past `expires_at`, whether or not a sweep has run yet.
    Expired,
    /// Marked sold by its owner.
    Sold,
    /// Permanently removed from the store.
    Purged,
}

/// A marketplace listing for a single PC part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique hash-based identifier (format: lst-XXXXXXXX).
    pub id: String,
    /// One-line summary.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category slug, fixed at creation.
    pub category: String,
    /// Manufacturer brand.
    #[serde(default)]
    pub brand: String,
    /// Manufacturer model.
    #[serde(default)]
    pub model: String,
    /// Physical condition.
    pub condition: Condition,
    /// Asking price, never negative.
    pub price: Decimal,
    /// Free-text pickup or shipping location.
    pub location: String,
    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Owner reference.
    pub seller_id: String,
    /// Whether the listing is live.
    pub is_active: bool,
    /// Whether the listing has been sold.
    #[serde(default)]
    pub is_sold: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of the last edit or transition.
    pub updated_at: i64,
    /// When the listing stops being active. `None` on legacy rows.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// When the listing is permanently purged. `None` on legacy rows.
    #[serde(default)]
    pub deleted_at: Option<i64>,
    /// Promotional flag; boosted listings sort first.
    #[serde(default)]
    pub is_boosted: bool,
    /// Monotonic view counter.
    #[serde(default)]
    pub views: u64,
}

impl Listing {
    /// Validates the listing data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title, category, location or seller is empty
    /// - Price is negative
    /// - The listing is sold but still active
    /// - `expires_at` is not strictly before `deleted_at`
    /// - ID format is invalid
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title", "cannot be empty"));
        }

        if self.category.trim().is_empty() {
            return Err(Error::validation("category", "is required"));
        }

        if self.location.trim().is_empty() {
            return Err(Error::validation("location", "cannot be empty"));
        }

        if self.seller_id.trim().is_empty() {
            return Err(Error::validation("seller_id", "cannot be empty"));
        }

        if self.price < Decimal::ZERO {
            return Err(Error::validation(
                "price",
                format!("must not be negative, got {}", self.price),
            ));
        }

        if self.is_sold && self.is_active {
            return Err(Error::validation(
                "is_active",
                "a sold listing cannot be active",
            ));
        }

        if let (Some(expires_at), Some(deleted_at)) = (self.expires_at, self.deleted_at) {
            if expires_at >= deleted_at {
                return Err(Error::validation(
                    "expires_at",
                    "must be before deleted_at",
                ));
            }
        }

        crate::identity::validate_id_format(&self.id)
    }

    /// Returns true if `user_id` owns the listing.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.seller_id == user_id
    }

    /// Returns true once `expires_at` has been reached.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Returns true once `deleted_at` has been reached.
    pub fn is_purge_due(&self, now: i64) -> bool {
        self.deleted_at.is_some_and(|deleted_at| deleted_at <= now)
    }

    /// Returns true if the listing belongs in the public feed at `now`.
    pub fn is_publicly_visible(&self, now: i64) -> bool {
        self.is_active && !self.is_sold && !self.is_expired(now) && !self.is_purge_due(now)
    }

    /// Returns true if a sweep at `now` must deactivate this listing.
    pub fn is_due_for_deactivation(&self, now: i64) -> bool {
        self.is_active && !self.is_sold && self.is_expired(now) && !self.is_purge_due(now)
    }

    /// Derives the lifecycle state at `now`.
    pub fn state(&self, now: i64) -> ListingState {
        if self.is_purge_due(now) {
            ListingState::Purged
        } else if self.is_sold {
            ListingState::Sold
        } else if self.is_expired(now) {
            ListingState::Expired
        } else if self.is_active {
            ListingState::Active
        } else {
            ListingState::Inactive
        }
    }
}

/// Caller-supplied fields for a new listing.
///
/// Server-computed fields (ID, seller, timestamps, lifecycle flags) are not
/// part of this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    /// One-line summary.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category slug or token.
    pub category: String,
    /// Manufacturer brand.
    #[serde(default)]
    pub brand: String,
    /// Manufacturer model.
    #[serde(default)]
    pub model: String,
    /// Physical condition (required).
    pub condition: Option<Condition>,
    /// Asking price (required).
    pub price: Option<Decimal>,
    /// Pickup or shipping location.
    pub location: String,
    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Promotional flag.
    #[serde(default)]
    pub is_boosted: bool,
}

impl NewListing {
    /// Checks the fields a caller must supply.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first missing or malformed field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title", "cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::validation("category", "is required"));
        }
        if self.condition.is_none() {
            return Err(Error::validation("condition", "is required"));
        }
        match self.price {
            None => return Err(Error::validation("price", "is required")),
            Some(price) if price < Decimal::ZERO => {
                return Err(Error::validation(
                    "price",
                    format!("must not be negative, got {}", price),
                ))
            }
            Some(_) => {}
        }
        if self.location.trim().is_empty() {
            return Err(Error::validation("location", "cannot be empty"));
        }
        Ok(())
    }

    /// Builds the stored listing.
    ///
    /// # Arguments
    ///
    /// * `id` - Pre-generated listing ID
    /// * `category` - Canonical category slug
    /// * `seller_id` - Owner reference
    /// * `now` - Creation time
    /// * `expire_after` - Seconds until the listing expires
    /// * `delete_after` - Seconds until the listing is purged
    ///
    /// # Errors
    ///
    /// Returns an error if the input or the resulting listing is invalid.
    pub fn into_listing(
        self,
        id: String,
        category: String,
        seller_id: String,
        now: i64,
        expire_after: i64,
        delete_after: i64,
    ) -> Result<Listing> {
        self.validate()?;

        let expires_at = now.checked_add(expire_after).ok_or_else(|| {
            Error::validation("expires_at", format!("{} + {} overflows", now, expire_after))
        })?;
        let deleted_at = now.checked_add(delete_after).ok_or_else(|| {
            Error::validation("deleted_at", format!("{} + {} overflows", now, delete_after))
        })?;

        let listing = Listing {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            category,
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            condition: self.condition.unwrap_or(Condition::Used),
            price: self.price.unwrap_or_default(),
            location: self.location.trim().to_string(),
            images: self.images,
            seller_id,
            is_active: true,
            is_sold: false,
            created_at: now,
            updated_at: now,
            expires_at: Some(expires_at),
            deleted_at: Some(deleted_at),
            is_boosted: self.is_boosted,
            views: 0,
        };
        listing.validate()?;
        Ok(listing)
    }
}

/// Partial edit of owner-editable fields.
///
/// Identity, ownership, category, lifecycle flags and timestamps cannot be
/// expressed here; those are server-computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New brand.
    pub brand: Option<String>,
    /// New model.
    pub model: Option<String>,
    /// New condition.
    pub condition: Option<Condition>,
    /// New price.
    pub price: Option<Decimal>,
    /// New location.
    pub location: Option<String>,
    /// Replacement image list.
    pub images: Option<Vec<String>>,
}

impl ListingPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &ListingPatch::default()
    }

    /// Validates the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty title or location or a negative
    /// price.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(Error::validation("title", "cannot be empty"));
            }
        }
        if let Some(location) = &self.location {
            if location.trim().is_empty() {
                return Err(Error::validation("location", "cannot be empty"));
            }
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(Error::validation(
                    "price",
                    format!("must not be negative, got {}", price),
                ));
            }
        }
        Ok(())
    }

    /// Merges the patch into `listing` and bumps `updated_at`.
    pub fn apply(&self, listing: &mut Listing, now: i64) {
        if let Some(title) = &self.title {
            listing.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            listing.description = description.clone();
        }
        if let Some(brand) = &self.brand {
            listing.brand = brand.trim().to_string();
        }
        if let Some(model) = &self.model {
            listing.model = model.trim().to_string();
        }
        if let Some(condition) = self.condition {
            listing.condition = condition;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(location) = &self.location {
            listing.location = location.trim().to_string();
        }
        if let Some(images) = &self.images {
            listing.images = images.clone();
        }
        listing.updated_at = now;
    }
}

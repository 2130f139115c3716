// Rust guideline compliant 2026-10-12

//! Composable listing predicates, sort orders and query execution.
//!
//! A [`Predicate`] is a conjunction of independent fragments. Each fragment
//! constructor in [`fragments`] captures exactly one facet and can be tested on
//! its own.

use crate::{Condition, Error, Listing, Result};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single filter over listings.
pub type Fragment = Box<dyn Fn(&Listing) -> bool + Send + Sync>;

/// Conjunction of predicate fragments.
#[derive(Default)]
pub struct Predicate {
    fragments: Vec<Fragment>,
}

impl Predicate {
    /// Creates a predicate matching every listing.
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds a fragment to the conjunction.
    #[must_use]
    pub fn and(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Returns true if every fragment matches.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.fragments.iter().all(|fragment| fragment(listing))
    }

    /// Returns the number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if the predicate has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("fragments", &self.fragments.len())
            .finish()
    }
}

/// Predicate fragment constructors.
pub mod fragments {
    use super::*;

    fn contains_ci(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(needle)
    }

    /// Public feed eligibility: active, unsold, not expired, not purge-due.
    ///
    /// Re-checks time at read so unswept listings never leak.
    pub fn publicly_visible(now: i64) -> Fragment {
        Box::new(move |l| l.is_publicly_visible(now))
    }

    /// Listings kept out of the public feed (inactive, sold or expired).
    pub fn not_publicly_visible(now: i64) -> Fragment {
        Box::new(move |l| !l.is_publicly_visible(now))
    }

    /// Excludes listings whose `deleted_at` has been reached.
    pub fn not_purge_due(now: i64) -> Fragment {
        Box::new(move |l| !l.is_purge_due(now))
    }

    /// Exact category slug.
    pub fn in_category(slug: String) -> Fragment {
        Box::new(move |l| l.category == slug)
    }

    /// Case-insensitive brand substring.
    pub fn brand_contains(brand: &str) -> Fragment {
        let needle = brand.trim().to_lowercase();
        Box::new(move |l| contains_ci(&l.brand, &needle))
    }

    /// Exact condition.
    pub fn has_condition(condition: Condition) -> Fragment {
        Box::new(move |l| l.condition == condition)
    }

    /// Inclusive lower price bound.
    pub fn price_at_least(min: Decimal) -> Fragment {
        Box::new(move |l| l.price >= min)
    }

    /// Inclusive upper price bound.
    pub fn price_at_most(max: Decimal) -> Fragment {
        Box::new(move |l| l.price <= max)
    }

    /// Case-insensitive location substring.
    pub fn location_contains(location: &str) -> Fragment {
        let needle = location.trim().to_lowercase();
        Box::new(move |l| contains_ci(&l.location, &needle))
    }

    /// Case-insensitive substring over title, description, brand and model.
    pub fn text_matches(text: &str) -> Fragment {
        let needle = text.trim().to_lowercase();
        Box::new(move |l| {
            contains_ci(&l.title, &needle)
                || contains_ci(&l.description, &needle)
                || contains_ci(&l.brand, &needle)
                || contains_ci(&l.model, &needle)
        })
    }

    /// Listings owned by `seller_id`.
    pub fn sold_by(seller_id: String) -> Fragment {
        Box::new(move |l| l.seller_id == seller_id)
    }
}

/// Result ordering. Boosted listings always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Oldest first.
    Oldest,
    /// Newest first.
    #[default]
    Newest,
}

impl SortOrder {
    /// Compares two listings: `is_boosted` descending, then the order's metric,
    /// then ID ascending so pages are deterministic.
    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        let metric = match self {
            SortOrder::PriceLow => a.price.cmp(&b.price),
            SortOrder::PriceHigh => b.price.cmp(&a.price),
            SortOrder::Oldest => a.created_at.cmp(&b.created_at),
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
        };

        b.is_boosted
            .cmp(&a.is_boosted)
            .then(metric)
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "oldest" => Ok(SortOrder::Oldest),
            "newest" | "recently-added" => Ok(SortOrder::Newest),
            other => Err(Error::validation(
                "sort",
                format!(
                    "'{}' is not one of price-low, price-high, oldest, newest, recently-added",
                    other
                ),
            )),
        }
    }
}

/// One page of results plus the exact total for the predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Matches across all pages.
    pub total_count: usize,
}

/// A fully planned read: predicate, order and window.
#[derive(Debug)]
pub struct ListingQuery {
    /// Conjunctive filter.
    pub predicate: Predicate,
    /// Result ordering.
    pub sort: SortOrder,
    /// Number of matches to skip.
    pub offset: usize,
    /// Maximum number of items returned.
    pub limit: usize,
}

impl ListingQuery {
    /// Filters, sorts and windows a snapshot of listings.
    ///
    /// Large snapshots are filtered in parallel.
    pub fn execute<I>(&self, listings: I) -> Page<Listing>
    where
        I: IntoIterator<Item = Listing>,
    {
        const PARALLEL_THRESHOLD: usize = 1_000;

        let listings: Vec<Listing> = listings.into_iter().collect();
        let mut matched: Vec<Listing> = if listings.len() >= PARALLEL_THRESHOLD {
            listings
                .into_par_iter()
                .filter(|l| self.predicate.matches(l))
                .collect()
        } else {
            listings
                .into_iter()
                .filter(|l| self.predicate.matches(l))
                .collect()
        };

        let total_count = matched.len();
        if matched.len() >= PARALLEL_THRESHOLD {
            matched.par_sort_by(|a, b| self.sort.compare(a, b));
        } else {
            matched.sort_by(|a, b| self.sort.compare(a, b));
        }

        let items = matched
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect();

        Page { items, total_count }
    }
}

// Rust guideline compliant 2026-10-12

//! Discovery queries: facet options, planning and paging.

use crate::error::Result;
use rigmarket_core::query::fragments;
use rigmarket_core::{
    Condition, Config, Error, FacetNormalizer, Listing, ListingQuery, ListingStore, Predicate,
    SortOrder,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Facets, order and window for a listing query. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Category slug or token.
    pub category: Option<String>,
    /// Brand substring, case-insensitive.
    pub brand: Option<String>,
    /// Exact condition (`new`, `used`, `refurbished`).
    pub condition: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Location substring, case-insensitive.
    pub location: Option<String>,
    /// Free-text search; may resolve to a category.
    pub search: Option<String>,
    /// Restrict to one seller's listings.
    pub seller_id: Option<String>,
    /// `Some(false)` selects listings outside the public feed.
    pub active: Option<bool>,
    /// Sort order name.
    pub sort: Option<String>,
    /// 1-indexed page number.
    pub page: Option<usize>,
    /// Page size.
    pub limit: Option<usize>,
}

/// A planned query plus the resolved page window.
#[derive(Debug)]
pub struct PlannedQuery {
    /// Predicate, order and window to run against the store.
    pub query: ListingQuery,
    /// Effective 1-indexed page.
    pub page: usize,
    /// Effective page size.
    pub limit: usize,
}

/// One page of discovery results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    /// Listings on this page.
    pub items: Vec<Listing>,
    /// Matches across all pages.
    pub total_count: usize,
    /// Effective 1-indexed page.
    pub page: usize,
    /// Effective page size.
    pub limit: usize,
    /// `ceil(total_count / limit)`.
    pub total_pages: usize,
}

/// Translates list options into store queries.
#[derive(Debug, Clone)]
pub struct QueryPlanner {
    normalizer: FacetNormalizer,
    default_page_size: usize,
    max_page_size: usize,
}

impl QueryPlanner {
    /// Creates a planner for the configured catalog and page sizes.
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: FacetNormalizer::new(&config.categories),
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }

    /// Builds the predicate, order and window for `options` at `now`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the field for an unknown category,
    /// condition or sort, and naming `price` for negative or inverted bounds.
    pub fn plan(&self, options: &ListOptions, now: i64) -> Result<PlannedQuery> {
        let condition = non_blank(options.condition.as_deref())
            .map(str::parse::<Condition>)
            .transpose()?;
        let sort = non_blank(options.sort.as_deref())
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        validate_price_range(options.min_price, options.max_price)?;

        let facets = self
            .normalizer
            .normalize(options.category.as_deref(), options.search.as_deref())?;

        let mut predicate = match options.active {
            Some(false) => Predicate::all()
                .and(fragments::not_publicly_visible(now))
                .and(fragments::not_purge_due(now)),
            Some(true) | None => Predicate::all().and(fragments::publicly_visible(now)),
        };

        if let Some(slug) = facets.category {
            predicate = predicate.and(fragments::in_category(slug));
        }
        if let Some(text) = facets.text {
            predicate = predicate.and(fragments::text_matches(&text));
        }
        if let Some(brand) = non_blank(options.brand.as_deref()) {
            predicate = predicate.and(fragments::brand_contains(brand));
        }
        if let Some(condition) = condition {
            predicate = predicate.and(fragments::has_condition(condition));
        }
        if let Some(min) = options.min_price {
            predicate = predicate.and(fragments::price_at_least(min));
        }
        if let Some(max) = options.max_price {
            predicate = predicate.and(fragments::price_at_most(max));
        }
        if let Some(location) = non_blank(options.location.as_deref()) {
            predicate = predicate.and(fragments::location_contains(location));
        }
        if let Some(seller_id) = non_blank(options.seller_id.as_deref()) {
            predicate = predicate.and(fragments::sold_by(seller_id.to_string()));
        }

        let page = options.page.unwrap_or(1).max(1);
        let limit = match options.limit {
            None | Some(0) => self.default_page_size,
            Some(limit) => limit.min(self.max_page_size),
        };

        Ok(PlannedQuery {
            query: ListingQuery {
                predicate,
                sort,
                offset: (page - 1).saturating_mul(limit),
                limit,
            },
            page,
            limit,
        })
    }

    /// Plans and runs a query against `store`.
    ///
    /// # Errors
    ///
    /// Returns planning errors, or an error if the store cannot be read.
    pub fn execute(
        &self,
        store: &dyn ListingStore,
        options: &ListOptions,
        now: i64,
    ) -> Result<ListingPage> {
        let planned = self.plan(options, now)?;
        let page = store.select(&planned.query)?;
        Ok(ListingPage {
            total_pages: page.total_count.div_ceil(planned.limit),
            items: page.items,
            total_count: page.total_count,
            page: planned.page,
            limit: planned.limit,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn validate_price_range(min: Option<Decimal>, max: Option<Decimal>) -> Result<()> {
    for bound in [min, max].into_iter().flatten() {
        if bound < Decimal::ZERO {
            return Err(Error::validation("price", format!("bound {} is negative", bound)).into());
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(Error::validation(
                "price",
                format!("min_price {} exceeds max_price {}", min, max),
            )
            .into());
        }
    }
    Ok(())
}

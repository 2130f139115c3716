// Rust guideline compliant 2026-10-12

//! Facet normalization for free-text search.
//!
//! A search string is normalized (uppercased, trimmed, internal whitespace
//! collapsed) and looked up, by exact match only, first in a fixed alias table
//! and then in the catalog's canonical tokens. A hit turns the search into a
//! category facet; a miss leaves it as a text filter.
//!
//! An explicit category facet always wins over a category inferred from the
//! search string.

use crate::{Category, Error, Result};
use std::collections::HashMap;

/// Fixed alias table, normalized form → category slug.
const ALIASES: &[(&str, &str)] = &[
    ("GRAPHICS CARD", "gpu"),
    ("GRAPHICS CARDS", "gpu"),
    ("VIDEO CARD", "gpu"),
    ("VIDEO CARDS", "gpu"),
    ("GRAPHICS", "gpu"),
    ("PROCESSOR", "cpu"),
    ("PROCESSORS", "cpu"),
    ("MOBO", "motherboard"),
    ("MAINBOARD", "motherboard"),
    ("MOTHERBOARDS", "motherboard"),
    ("MEMORY", "ram"),
    ("DDR4", "ram"),
    ("DDR5", "ram"),
    ("SSD", "storage"),
    ("HDD", "storage"),
    ("NVME", "storage"),
    ("HARD DRIVE", "storage"),
    ("POWER SUPPLY", "psu"),
    ("POWER SUPPLIES", "psu"),
    ("CHASSIS", "case"),
    ("TOWER", "case"),
    ("COOLER", "cooling"),
    ("CPU COOLER", "cooling"),
    ("AIO", "cooling"),
    ("FANS", "cooling"),
    ("DISPLAY", "monitor"),
    ("SCREEN", "monitor"),
    ("KEYBOARD", "peripherals"),
    ("MOUSE", "peripherals"),
    ("HEADSET", "peripherals"),
    ("ROUTER", "networking"),
    ("WIFI", "networking"),
    ("NOTEBOOK", "laptop"),
    ("GAMING PC", "prebuilt"),
    ("DESKTOP", "prebuilt"),
];

/// Normalizes search input: uppercase, trim, collapse internal whitespace.
pub fn normalize_search(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Outcome of resolving a search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResolution {
    /// Nothing to search for.
    Empty,
    /// The search named a category, by alias or canonical token.
    Category(String),
    /// The search is a substring filter over listing text.
    Text(String),
}

/// Normalized category and text facets, after precedence is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFacets {
    /// Category slug to filter on.
    pub category: Option<String>,
    /// Lowercased needle for the text filter.
    pub text: Option<String>,
    /// Category resolved from the search string, even if it was overridden.
    pub resolved_from_search: Option<String>,
}

/// Maps free-text search input to canonical category slugs.
#[derive(Debug, Clone)]
pub struct FacetNormalizer {
    /// Canonical token → slug.
    tokens: HashMap<String, String>,
    /// Alias → slug, restricted to slugs present in the catalog.
    aliases: HashMap<&'static str, String>,
}

impl FacetNormalizer {
    /// Builds a normalizer for the given catalog.
    pub fn new(categories: &[Category]) -> Self {
        let tokens: HashMap<String, String> = categories
            .iter()
            .map(|category| (category.token(), category.slug.clone()))
            .collect();

        let aliases = ALIASES
            .iter()
            .filter(|(_, slug)| tokens.values().any(|known| known == slug))
            .map(|(alias, slug)| (*alias, slug.to_string()))
            .collect();

        Self { tokens, aliases }
    }

    /// Resolves a search string to a category or a text filter.
    pub fn resolve(&self, search: &str) -> SearchResolution {
        let normalized = normalize_search(search);
        if normalized.is_empty() {
            return SearchResolution::Empty;
        }

        if let Some(slug) = self.aliases.get(normalized.as_str()) {
            return SearchResolution::Category(slug.clone());
        }

        if let Some(slug) = self.tokens.get(&normalized) {
            return SearchResolution::Category(slug.clone());
        }

        SearchResolution::Text(normalized.to_lowercase())
    }

    /// Resolves an explicit category facet to its canonical slug.
    ///
    /// Accepts the slug or its token in any case.
    pub fn canonical_category(&self, explicit: &str) -> Option<String> {
        self.tokens.get(&normalize_search(explicit)).cloned()
    }

    /// Combines an explicit category facet and a search string.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `category` if the explicit facet is
    /// not in the catalog.
    pub fn normalize(
        &self,
        explicit_category: Option<&str>,
        search: Option<&str>,
    ) -> Result<NormalizedFacets> {
        let explicit = match explicit_category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(raw) => Some(self.canonical_category(raw).ok_or_else(|| {
                Error::validation("category", format!("unknown category '{}'", raw))
            })?),
            None => None,
        };

        let resolution = search.map_or(SearchResolution::Empty, |s| self.resolve(s));

        let facets = match resolution {
            SearchResolution::Empty => NormalizedFacets {
                category: explicit,
                ..NormalizedFacets::default()
            },
            SearchResolution::Text(needle) => NormalizedFacets {
                category: explicit,
                text: Some(needle),
                resolved_from_search: None,
            },
            SearchResolution::Category(resolved) => NormalizedFacets {
                category: explicit.or_else(|| Some(resolved.clone())),
                text: None,
                resolved_from_search: Some(resolved),
            },
        };

        Ok(facets)
    }
}

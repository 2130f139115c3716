// Rust guideline compliant 2026-10-12

//! Rigmarket Core Library
//!
//! This crate provides the foundational components for the Rigmarket PC-parts
//! marketplace:
//! - Data models (Listing, NewListing, ListingPatch, Condition)
//! - Lifecycle FSM (derived states, transition guards)
//! - Facet normalization (search aliases, category tokens)
//! - Query building (predicate fragments, sort orders, paging)
//! - Listing stores (in-memory and JSONL, with conditional updates)
//! - Configuration, clocks, hash IDs and error types

pub mod clock;
pub mod config;
pub mod error;
pub mod facets;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod query;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Category, Config};
pub use error::{Error, Result};
pub use facets::{FacetNormalizer, NormalizedFacets, SearchResolution};
pub use fsm::validate_transition;
pub use models::{Condition, Listing, ListingPatch, ListingState, NewListing};
pub use query::{ListingQuery, Page, Predicate, SortOrder};
pub use storage::{JsonlStore, ListingStore, MemoryStore, UpdateOutcome};

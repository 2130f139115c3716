// Rust guideline compliant 2026-10-12

//! Shared application services for Rigmarket.
//!
//! This crate provides the request-level marketplace operations (listing
//! lifecycle, discovery queries, periodic sweeps), lifecycle event sinks,
//! market directory discovery and standardized response envelopes.

pub mod error;
pub mod events;
pub mod ids;
pub mod lifecycle;
pub mod list;
pub mod market;
pub mod repo;
pub mod response;
pub mod session;
pub mod sweep;

pub use error::{AppError, ErrorCode, Result};
pub use events::{BroadcastSink, EventKind, EventSink, ListingEvent, NullSink, TracingSink};
pub use ids::resolve_listing_id;
pub use lifecycle::LifecycleManager;
pub use list::{ListOptions, ListingPage, PlannedQuery, QueryPlanner};
pub use market::Marketplace;
pub use repo::{MarketContext, MARKET_DIR};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use session::Identity;
pub use sweep::{SweepHandle, SweepReport, SweepScheduler, Sweeper};

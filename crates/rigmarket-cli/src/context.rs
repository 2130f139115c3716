// Rust guideline compliant 2026-10-12

//! Per-invocation state shared by every command.

use rigmarket_app::{resolve_listing_id, AppError, Identity, MarketContext, Marketplace, TracingSink};
use rigmarket_core::SystemClock;
use std::path::PathBuf;
use std::sync::Arc;

/// Global flags resolved once in `main` and handed to each command.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Directory containing `.rigmarket`; the current directory when unset.
    pub root: Option<PathBuf>,
    /// Acting user ID.
    pub user: Option<String>,
    /// Acting user's email.
    pub email: Option<String>,
    /// Acting user's display name.
    pub username: Option<String>,
}

impl CliContext {
    /// Locates the market directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `.rigmarket` does not exist under the root.
    pub fn market(&self) -> Result<MarketContext, AppError> {
        MarketContext::discover(self.root.as_deref())
    }

    /// Opens the marketplace on the system clock with events logged via `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the market is not initialized or its config is invalid.
    pub fn open(&self) -> Result<Marketplace, AppError> {
        self.market()?
            .open_marketplace(Arc::new(SystemClock), Arc::new(TracingSink))
    }

    /// Returns the acting identity.
    ///
    /// Email and username default to values derived from the user ID.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if `--user` was not given.
    pub fn identity(&self) -> Result<Identity, AppError> {
        let id = self
            .user
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::InvalidInput("--user is required for this command".to_string()))?;
        let email = self
            .email
            .clone()
            .unwrap_or_else(|| format!("{}@localhost", id));
        let username = self.username.clone().unwrap_or_else(|| id.to_string());
        Ok(Identity::new(id, email, username))
    }
}

/// Resolves a full or partial listing ID against every stored listing.
///
/// # Errors
///
/// Returns an error if the ID is too short, ambiguous, or not found.
pub fn resolve_id(market: &Marketplace, partial: &str) -> Result<String, AppError> {
    let listings = market.all_listings()?;
    resolve_listing_id(partial, &listings)
}

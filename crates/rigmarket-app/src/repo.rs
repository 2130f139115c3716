// Rust guideline compliant 2026-10-12

//! Market directory discovery and path management utilities.

use crate::error::{AppError, Result};
use crate::events::EventSink;
use crate::market::Marketplace;
use rigmarket_core::{Clock, Config, JsonlStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the directory holding market data.
pub const MARKET_DIR: &str = ".rigmarket";

/// Path metadata for a Rigmarket data directory.
#[derive(Debug, Clone)]
pub struct MarketContext {
    root: PathBuf,
    market_dir: PathBuf,
    listings_path: PathBuf,
    config_path: PathBuf,
}

impl MarketContext {
    fn at(root: PathBuf) -> Self {
        let market_dir = root.join(MARKET_DIR);
        Self {
            listings_path: market_dir.join("listings.jsonl"),
            config_path: market_dir.join("config.toml"),
            market_dir,
            root,
        }
    }

    /// Discovers a market directory starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional root to pin discovery; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.rigmarket` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.market_dir.exists() {
            return Err(AppError::MarketNotInitialized {
                path: context.market_dir,
            });
        }
        Ok(context)
    }

    /// Creates the market directory with a default configuration.
    ///
    /// Existing files are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be written.
    pub fn init(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        std::fs::create_dir_all(&context.market_dir)?;
        if !context.config_path.exists() {
            Config::default().save(&context.market_dir)?;
        }
        if !context.listings_path.exists() {
            std::fs::File::create(&context.listings_path)?;
        }
        Ok(context)
    }

    /// Returns the root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.rigmarket` directory path.
    #[must_use]
    pub fn market_dir(&self) -> &Path {
        self.market_dir.as_path()
    }

    /// Returns the listings JSONL path.
    #[must_use]
    pub fn listings_path(&self) -> &Path {
        self.listings_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the listing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_store(&self) -> Result<JsonlStore> {
        Ok(JsonlStore::new(self.listings_path.clone())?)
    }

    /// Loads configuration, applying environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.market_dir())?)
    }

    /// Opens a marketplace over this directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or store cannot be opened.
    pub fn open_marketplace(
        &self,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Result<Marketplace> {
        let config = self.load_config()?;
        let store = Arc::new(self.open_store()?);
        Ok(Marketplace::with_events(config, store, clock, events))
    }
}

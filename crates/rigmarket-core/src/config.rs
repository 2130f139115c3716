// Rust guideline compliant 2026-10-12

//! Configuration management for Rigmarket.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A stable taxonomy node listings are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Lowercase identifier stored on listings (e.g. `gpu`).
    pub slug: String,
    /// Display name (e.g. `Graphics Cards`).
    pub name: String,
}

impl Category {
    /// Creates a category.
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the canonical search token for this category.
    pub fn token(&self) -> String {
        self.slug.to_uppercase()
    }
}

/// Configuration for listing lifecycle and discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Seconds from creation until a listing expires.
    #[serde(default = "default_expire_after_secs")]
    pub expire_after_secs: i64,

    /// Seconds from creation until a listing is purged.
    #[serde(default = "default_delete_after_secs")]
    pub delete_after_secs: i64,

    /// Seconds between sweeps.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Page size used when a query supplies none.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound on requested page sizes.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Category catalog.
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

const DAY_SECS: i64 = 24 * 60 * 60;

/// Upper bound on `delete_after_secs`: ten years.
pub const MAX_RETENTION_SECS: i64 = 10 * 365 * DAY_SECS;

fn default_expire_after_secs() -> i64 {
    30 * DAY_SECS
}

fn default_delete_after_secs() -> i64 {
    60 * DAY_SECS
}

fn default_sweep_interval_secs() -> u64 {
    3600
}

fn default_page_size() -> usize {
    12
}

fn default_max_page_size() -> usize {
    100
}

/// Default PC-parts catalog.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("cpu", "Processors"),
        Category::new("gpu", "Graphics Cards"),
        Category::new("motherboard", "Motherboards"),
        Category::new("ram", "Memory"),
        Category::new("storage", "Storage"),
        Category::new("psu", "Power Supplies"),
        Category::new("case", "Cases"),
        Category::new("cooling", "Cooling"),
        Category::new("monitor", "Monitors"),
        Category::new("peripherals", "Peripherals"),
        Category::new("networking", "Networking"),
        Category::new("laptop", "Laptops"),
        Category::new("prebuilt", "Prebuilt PCs"),
        Category::new("other", "Other"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expire_after_secs: default_expire_after_secs(),
            delete_after_secs: default_delete_after_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.rigmarket/config.toml`
    /// 3. Environment variables with `RIGMARKET_` prefix
    ///
    /// # Arguments
    ///
    /// * `market_dir` - Path to the `.rigmarket` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(market_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = market_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `RIGMARKET_EXPIRE_AFTER_SECS`
    /// - `RIGMARKET_DELETE_AFTER_SECS`
    /// - `RIGMARKET_SWEEP_INTERVAL_SECS`
    /// - `RIGMARKET_DEFAULT_PAGE_SIZE`
    /// - `RIGMARKET_MAX_PAGE_SIZE`
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is not a number.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(val) = env_number("RIGMARKET_EXPIRE_AFTER_SECS")? {
            self.expire_after_secs = val;
        }
        if let Some(val) = env_number("RIGMARKET_DELETE_AFTER_SECS")? {
            self.delete_after_secs = val;
        }
        if let Some(val) = env_number("RIGMARKET_SWEEP_INTERVAL_SECS")? {
            self.sweep_interval_secs = val;
        }
        if let Some(val) = env_number("RIGMARKET_DEFAULT_PAGE_SIZE")? {
            self.default_page_size = val;
        }
        if let Some(val) = env_number("RIGMARKET_MAX_PAGE_SIZE")? {
            self.max_page_size = val;
        }
        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either lifecycle offset is not positive
    /// - `expire_after_secs` is not strictly less than `delete_after_secs`
    /// - `sweep_interval_secs` is zero
    /// - Page sizes are zero or the default exceeds the maximum
    /// - The catalog is empty or has blank, non-lowercase or duplicate slugs
    pub fn validate(&self) -> Result<()> {
        if self.expire_after_secs <= 0 || self.delete_after_secs <= 0 {
            return Err(Error::Config(
                "expire_after_secs and delete_after_secs must be positive".to_string(),
            ));
        }

        if self.delete_after_secs > MAX_RETENTION_SECS {
            return Err(Error::Config(format!(
                "delete_after_secs ({}) exceeds the maximum of {}",
                self.delete_after_secs, MAX_RETENTION_SECS
            )));
        }

        if self.expire_after_secs >= self.delete_after_secs {
            return Err(Error::Config(format!(
                "expire_after_secs ({}) must be less than delete_after_secs ({})",
                self.expire_after_secs, self.delete_after_secs
            )));
        }

        if self.sweep_interval_secs == 0 {
            return Err(Error::Config(
                "sweep_interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(Error::Config("page sizes must be greater than 0".to_string()));
        }

        if self.default_page_size > self.max_page_size {
            return Err(Error::Config(format!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }

        if self.categories.is_empty() {
            return Err(Error::Config("at least one category is required".to_string()));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let slug = category.slug.as_str();
            if slug.trim().is_empty() || slug != slug.to_lowercase() || slug.contains(char::is_whitespace) {
                return Err(Error::Config(format!(
                    "category slug '{}' must be a non-empty lowercase word",
                    slug
                )));
            }
            if !seen.insert(slug) {
                return Err(Error::Config(format!("duplicate category slug '{}'", slug)));
            }
        }

        Ok(())
    }

    /// Looks up a category by slug, ignoring case.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        let slug = slug.trim().to_lowercase();
        self.categories.iter().find(|category| category.slug == slug)
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `market_dir` - Path to the `.rigmarket` directory
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, market_dir: &Path) -> Result<()> {
        let config_path = market_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", name, val))),
        Err(_) => Ok(None),
    }
}

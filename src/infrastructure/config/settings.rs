//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; the marketplace API key is read
//! from `PRICEDEX_API_KEY` and never from the file.
//!
//! # Example
//!
//! ```no_run
//! use pricedex::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use super::collectible::{CollectibleEntry, DEFAULT_CATEGORY};
use super::logging::LoggingConfig;
use super::selection::{CacheConfig, CategoryConfig, SelectionConfig};
use crate::adapter::outbound::marketplace::MarketplaceConfig;
use crate::application::catalog::{CatalogRecord, CollectibleCatalog};
use crate::domain::SelectionStrategy;
use crate::error::{ConfigError, Result};

/// Environment variable holding the marketplace API key.
pub const API_KEY_ENV: &str = "PRICEDEX_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub marketplace: MarketplaceConfig,

    /// Global filter defaults.
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    /// Per-category selection mode and overrides, keyed by category name.
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,

    #[serde(default)]
    pub collectibles: Vec<CollectibleEntry>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Secrets come from the environment only.
        config.marketplace.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        validate_url("marketplace.data_url", &self.marketplace.data_url)?;
        validate_url("marketplace.lookup_url", &self.marketplace.lookup_url)?;
        if self.marketplace.listing_host.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "marketplace.listing_host",
            }
            .into());
        }

        let http = &self.marketplace.http;
        if http.timeout_ms == 0 || http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "marketplace.http",
                reason: "timeouts must be greater than 0".to_string(),
            }
            .into());
        }
        if http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "marketplace.http.retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.selection.validate()?;
        self.cache.validate()?;
        for category in self.categories.values() {
            category.validate(&self.selection)?;
        }

        for entry in &self.collectibles {
            if entry.fallback_price < Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "collectibles.fallback_price",
                    reason: format!("fallback price for '{}' must be 0 or greater", entry.slug),
                }
                .into());
            }
        }
        CollectibleCatalog::build(self.catalog_records())?;

        Ok(())
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Catalog records for every `[[collectibles]]` entry, in file order.
    #[must_use]
    pub fn catalog_records(&self) -> Vec<CatalogRecord> {
        self.collectibles
            .iter()
            .map(CollectibleEntry::to_record)
            .collect()
    }

    /// Strategy for categories without a `[categories.<name>]` section.
    #[must_use]
    pub fn default_strategy(&self) -> SelectionStrategy {
        SelectionStrategy {
            policy: self.selection.policy(),
            ..SelectionStrategy::default()
        }
    }

    /// Resolved strategy per configured category.
    #[must_use]
    pub fn strategies(&self) -> HashMap<String, SelectionStrategy> {
        self.categories
            .iter()
            .map(|(name, category)| (name.clone(), category.strategy(&self.selection)))
            .collect()
    }

    /// Strategy applied to `category`.
    #[must_use]
    pub fn strategy_for(&self, category: &str) -> SelectionStrategy {
        self.categories
            .get(category)
            .map_or_else(|| self.default_strategy(), |c| c.strategy(&self.selection))
    }

    /// Categories referenced by collectibles but never configured.
    #[must_use]
    pub fn unconfigured_categories(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .collectibles
            .iter()
            .map(|entry| entry.category.as_str())
            .filter(|name| *name != DEFAULT_CATEGORY && !self.categories.contains_key(*name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let url = Url::parse(value).map_err(|err| ConfigError::InvalidValue {
        field,
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{value}' is not an http(s) base URL"),
        }
        .into());
    }
    Ok(())
}

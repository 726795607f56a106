//! Alias-keyed collectible catalog.
//!
//! One record per collectible, reachable through both its UUID and its slug.
//! Built once at startup and read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{CollectibleConfig, CollectibleDisplayData, CollectibleId};
use crate::error::{ConfigError, Result};
use crate::port::outbound::CollectibleDirectory;

/// Configuration plus display data for one collectible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub config: CollectibleConfig,
    pub display: CollectibleDisplayData,
}

/// In-memory [`CollectibleDirectory`].
#[derive(Debug, Default)]
pub struct CollectibleCatalog {
    records: Vec<(Arc<CollectibleConfig>, CollectibleDisplayData)>,
    aliases: HashMap<String, usize>,
}

impl CollectibleCatalog {
    /// Build the catalog, registering each record under its UUID and slug.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an id is not a UUID, a slug
    /// is empty or UUID-shaped, or two records share an alias.
    #[allow(clippy::result_large_err)]
    pub fn build(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut catalog = Self::default();

        for CatalogRecord { mut config, display } in records {
            let id = CollectibleId::from(config.id.as_str());
            if !id.is_uuid() {
                return Err(ConfigError::InvalidValue {
                    field: "collectibles.id",
                    reason: format!("'{}' is not a UUID", config.id),
                }
                .into());
            }
            let slug = CollectibleId::from(config.slug.as_str());
            if config.slug.trim().is_empty() || slug.is_uuid() {
                return Err(ConfigError::InvalidValue {
                    field: "collectibles.slug",
                    reason: format!("slug for {} must be a non-empty, non-UUID name", config.id),
                }
                .into());
            }

            config.id = id.alias_key();
            let index = catalog.records.len();
            for alias in [id.alias_key(), slug.alias_key()] {
                if catalog.aliases.insert(alias.clone(), index).is_some() {
                    return Err(ConfigError::InvalidValue {
                        field: "collectibles",
                        reason: format!("duplicate collectible alias '{alias}'"),
                    }
                    .into());
                }
            }
            catalog.records.push((Arc::new(config), display));
        }

        Ok(catalog)
    }

    /// Number of collectibles (not aliases).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, id: &CollectibleId) -> Option<&(Arc<CollectibleConfig>, CollectibleDisplayData)> {
        let index = *self.aliases.get(&id.alias_key())?;
        self.records.get(index)
    }
}

impl CollectibleDirectory for CollectibleCatalog {
    fn config(&self, id: &CollectibleId) -> Option<Arc<CollectibleConfig>> {
        self.lookup(id).map(|(config, _)| Arc::clone(config))
    }

    fn display(&self, id: &CollectibleId) -> Option<CollectibleDisplayData> {
        self.lookup(id).map(|(_, display)| display.clone())
    }
}

//! `[[collectibles]]` entries.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::catalog::CatalogRecord;
use crate::domain::{CollectibleConfig, CollectibleDisplayData};

/// Category used when an entry names none.
pub const DEFAULT_CATEGORY: &str = "default";

/// One collectible as written in the config file.
///
/// Table names default to `{slug}_prices`, `{slug}_history` and
/// `{slug}_listings` with `-` replaced by `_`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectibleEntry {
    pub id: String,
    pub slug: String,
    pub fallback_price: Decimal,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub price_table: Option<String>,
    #[serde(default)]
    pub history_table: Option<String>,
    #[serde(default)]
    pub listings_table: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub set_label: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl CollectibleEntry {
    fn table(&self, explicit: Option<&String>, suffix: &str) -> String {
        explicit.cloned().unwrap_or_else(|| {
            format!("{}_{suffix}", self.slug.trim().to_ascii_lowercase().replace('-', "_"))
        })
    }

    /// Catalog record for this entry.
    #[must_use]
    pub fn to_record(&self) -> CatalogRecord {
        CatalogRecord {
            config: CollectibleConfig {
                id: self.id.clone(),
                slug: self.slug.clone(),
                price_table: self.table(self.price_table.as_ref(), "prices"),
                history_table: self.table(self.history_table.as_ref(), "history"),
                listings_table: self.table(self.listings_table.as_ref(), "listings"),
                fallback_price: self.fallback_price,
                category: self.category.clone(),
            },
            display: CollectibleDisplayData {
                name: self.name.clone().unwrap_or_else(|| self.slug.clone()),
                image_url: self.image_url.clone(),
                set_label: self.set_label.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tables_default_from_slug() {
        let entry: CollectibleEntry = toml::from_str(
            r#"
id = "5f0c2a7e-3b1d-4c55-9e0a-6d2b8f1c4a90"
slug = "charizard-base"
fallback_price = 16.94
listings_table = "charizard_offers"
"#,
        )
        .unwrap();

        let record = entry.to_record();
        assert_eq!(record.config.price_table, "charizard_base_prices");
        assert_eq!(record.config.history_table, "charizard_base_history");
        assert_eq!(record.config.listings_table, "charizard_offers");
        assert_eq!(record.config.fallback_price, dec!(16.94));
        assert_eq!(record.config.category, "default");
        assert_eq!(record.display.name, "charizard-base");
    }
}

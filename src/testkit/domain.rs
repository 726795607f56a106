//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for catalog records and raw listings
//! so tests focus on assertions rather than construction boilerplate.

use rust_decimal::Decimal;

use crate::application::catalog::{CatalogRecord, CollectibleCatalog};
use crate::domain::{CollectibleConfig, CollectibleDisplayData, RawListing};

/// Catalog record with tables named `{slug}_prices`, `{slug}_history` and
/// `{slug}_listings` in the `default` category.
pub fn collectible_entry(id: &str, slug: &str, fallback_price: Decimal) -> CatalogRecord {
    CatalogRecord {
        config: CollectibleConfig {
            id: id.to_string(),
            slug: slug.to_string(),
            price_table: format!("{slug}_prices"),
            history_table: format!("{slug}_history"),
            listings_table: format!("{slug}_listings"),
            fallback_price,
            category: "default".to_string(),
        },
        display: CollectibleDisplayData {
            name: slug.replace('-', " "),
            image_url: format!("https://img.example/{slug}.webp"),
            set_label: "Base Set".to_string(),
        },
    }
}

/// Build a catalog, panicking on invalid records.
pub fn catalog_with(records: Vec<CatalogRecord>) -> CollectibleCatalog {
    CollectibleCatalog::build(records).expect("test catalog must be valid")
}

/// Listing with a price and optional condition; links are fixed.
pub fn listing(price: &str, condition: Option<&str>) -> RawListing {
    RawListing {
        image_ref: "https://img.example/g/abc/s-l225.jpg".to_string(),
        item_ref: "v1|123456789|0".to_string(),
        total_price: price.to_string(),
        seller_name: "seller".to_string(),
        condition_name: condition.map(str::to_string),
    }
}

/// Listing with a specific image reference.
pub fn listing_with_image(image_ref: &str, price: &str) -> RawListing {
    RawListing {
        image_ref: image_ref.to_string(),
        ..listing(price, None)
    }
}

/// Listing with a specific item reference.
pub fn listing_with_item(item_ref: &str, price: &str) -> RawListing {
    RawListing {
        item_ref: item_ref.to_string(),
        ..listing(price, None)
    }
}

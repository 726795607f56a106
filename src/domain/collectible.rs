//! Collectible configuration and display data.

use rust_decimal::Decimal;
use serde::Serialize;

/// Data-source wiring for one collectible.
///
/// Records are loaded once at startup and shared behind an `Arc`; the same
/// record is returned whether it is looked up by UUID or by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectibleConfig {
    /// Canonical UUID (lowercase, hyphenated).
    pub id: String,
    /// Human-readable alias.
    pub slug: String,
    /// Summary table holding the most recent price snapshot.
    pub price_table: String,
    /// Table holding the price history used for charts.
    pub history_table: String,
    /// Table holding raw marketplace listings.
    pub listings_table: String,
    /// Price returned when the current-price source cannot be used.
    pub fallback_price: Decimal,
    /// Category name; decides the listing selection mode.
    pub category: String,
}

/// Purely descriptive data for rendering a collectible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectibleDisplayData {
    pub name: String,
    pub image_url: String,
    pub set_label: String,
}

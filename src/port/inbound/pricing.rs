//! Pricing operations exposed to callers.
//!
//! None of these operations fail: unknown collectibles, transport errors and
//! malformed records all degrade to defaults or `None`.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{CollectibleConfig, CollectibleDisplayData, PricePoint, ResolvedListing};

#[async_trait]
pub trait PricingService: Send + Sync {
    /// Current price, or the configured fallback (`0` for unknown ids).
    async fn resolve_price(&self, collectible_id: &str) -> Decimal;

    /// Best listing for `target_price`; the mode comes from the collectible's category.
    async fn select_listing(
        &self,
        collectible_id: &str,
        target_price: Decimal,
    ) -> Option<ResolvedListing>;

    /// Up to `limit` history points, oldest first; empty on any failure.
    async fn price_history(&self, collectible_id: &str, limit: usize) -> Vec<PricePoint>;

    fn collectible_config(&self, collectible_id: &str) -> Option<Arc<CollectibleConfig>>;

    fn collectible_display_data(&self, collectible_id: &str) -> Option<CollectibleDisplayData>;
}

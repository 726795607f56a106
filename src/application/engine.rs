//! Pricing engine facade.
//!
//! Wires the catalog, the price resolver and the listing selector behind the
//! [`PricingService`] port. The selection mode for a collectible comes from
//! its category; categories without an entry use price mode with the default
//! policy.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::price::PriceResolver;
use super::selector::ListingSelector;
use crate::domain::{
    CollectibleConfig, CollectibleDisplayData, CollectibleId, PricePoint, Resolution,
    ResolvedListing, SelectionStrategy,
};
use crate::port::inbound::PricingService;
use crate::port::outbound::{CollectibleDirectory, FallbackPriceSource, MarketDataSource};

/// Listing resolution and price caching engine.
pub struct PricingEngine {
    directory: Arc<dyn CollectibleDirectory>,
    source: Arc<dyn MarketDataSource>,
    resolver: PriceResolver,
    selector: ListingSelector,
    categories: HashMap<String, SelectionStrategy>,
    default_strategy: SelectionStrategy,
}

impl PricingEngine {
    #[must_use]
    pub fn new(
        directory: Arc<dyn CollectibleDirectory>,
        source: Arc<dyn MarketDataSource>,
        fallback_source: Arc<dyn FallbackPriceSource>,
        selector: ListingSelector,
    ) -> Self {
        let resolver = PriceResolver::new(directory.clone(), source.clone(), fallback_source);
        Self {
            directory,
            source,
            resolver,
            selector,
            categories: HashMap::new(),
            default_strategy: SelectionStrategy::default(),
        }
    }

    /// Register the strategy used for `category`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, strategy: SelectionStrategy) -> Self {
        self.categories.insert(category.into(), strategy);
        self
    }

    /// Strategy for categories without an explicit entry.
    #[must_use]
    pub fn with_default_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Strategy applied to collectibles of `category`.
    #[must_use]
    pub fn strategy_for(&self, category: &str) -> &SelectionStrategy {
        self.categories.get(category).unwrap_or(&self.default_strategy)
    }

    /// Price resolution with the fallback reason preserved.
    pub async fn resolve_price_detailed(&self, collectible_id: &str) -> Resolution<Decimal> {
        self.resolver.resolve(&CollectibleId::from(collectible_id)).await
    }
}

#[async_trait]
impl PricingService for PricingEngine {
    async fn resolve_price(&self, collectible_id: &str) -> Decimal {
        self.resolve_price_detailed(collectible_id).await.value()
    }

    async fn select_listing(
        &self,
        collectible_id: &str,
        target_price: Decimal,
    ) -> Option<ResolvedListing> {
        let Some(config) = self.directory.config(&CollectibleId::from(collectible_id)) else {
            debug!(collectible = collectible_id, "No configuration, no listing");
            return None;
        };

        let listings = match self.source.listings(&config.listings_table).await {
            Ok(listings) => listings,
            Err(err) => {
                warn!(
                    collectible = %config.slug,
                    table = %config.listings_table,
                    source = self.source.source_name(),
                    error = %err,
                    "Listings unavailable"
                );
                return None;
            }
        };

        let strategy = self.strategy_for(&config.category);
        self.selector
            .select(
                &config.slug,
                target_price,
                &listings,
                &strategy.mode,
                &strategy.policy,
            )
            .await
    }

    async fn price_history(&self, collectible_id: &str, limit: usize) -> Vec<PricePoint> {
        self.resolver
            .history(&CollectibleId::from(collectible_id), limit)
            .await
    }

    fn collectible_config(&self, collectible_id: &str) -> Option<Arc<CollectibleConfig>> {
        self.directory.config(&CollectibleId::from(collectible_id))
    }

    fn collectible_display_data(&self, collectible_id: &str) -> Option<CollectibleDisplayData> {
        self.directory.display(&CollectibleId::from(collectible_id))
    }
}

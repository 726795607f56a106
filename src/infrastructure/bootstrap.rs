//! Composition root for the pricing engine.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::marketplace::MarketplaceClient;
use crate::application::cache::InMemoryScoreCache;
use crate::application::catalog::CollectibleCatalog;
use crate::application::engine::PricingEngine;
use crate::application::heuristic::HeuristicSet;
use crate::application::selector::ListingSelector;
use crate::application::url::UrlCanonicalizer;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::{FallbackPriceSource, MarketDataSource, ScoreCache};

/// Build the engine against the HTTP marketplace.
///
/// # Errors
///
/// Returns an error when the collectible catalog is invalid.
#[allow(clippy::result_large_err)]
pub fn build_engine(config: &Config) -> Result<PricingEngine> {
    let client = Arc::new(MarketplaceClient::from_config(&config.marketplace));
    if config.marketplace.api_key.is_none() {
        warn!("PRICEDEX_API_KEY not set, marketplace requests are unauthenticated");
    }
    build_engine_with(config, client.clone(), client)
}

/// Build the engine against the given data sources.
///
/// # Errors
///
/// Returns an error when the collectible catalog is invalid.
#[allow(clippy::result_large_err)]
pub fn build_engine_with(
    config: &Config,
    source: Arc<dyn MarketDataSource>,
    fallback_source: Arc<dyn FallbackPriceSource>,
) -> Result<PricingEngine> {
    let catalog = CollectibleCatalog::build(config.catalog_records())?;
    let collectibles = catalog.len();

    let cache: Arc<dyn ScoreCache> = Arc::new(InMemoryScoreCache::new(config.cache.ttl()));
    let selector = ListingSelector::new(
        UrlCanonicalizer::new(config.marketplace.listing_host.clone()),
        HeuristicSet::placeholder(cache),
    );

    let mut engine = PricingEngine::new(Arc::new(catalog), source, fallback_source, selector)
        .with_default_strategy(config.default_strategy());
    for (category, strategy) in config.strategies() {
        info!(category = %category, mode = strategy.mode.label(), "Category strategy");
        engine = engine.with_category(category, strategy);
    }

    for category in config.unconfigured_categories() {
        warn!(category, "Category has no [categories] section, using price mode");
    }

    info!(
        collectibles,
        data_url = %config.marketplace.data_url,
        ttl_secs = config.cache.ttl_secs,
        "Pricing engine ready"
    );
    Ok(engine)
}

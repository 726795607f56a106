//! Tiered price resolution.
//!
//! ```text
//! known id   → latest snapshot ─ ok ──────────────▶ snapshot price
//!                              └ any failure ─────▶ config.fallback_price
//! unknown id → generic lookup  ─ ok ──────────────▶ lookup price
//!                              └ any failure ─────▶ 0
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{CollectibleConfig, CollectibleId, FallbackReason, PricePoint, Resolution};
use crate::port::outbound::{CollectibleDirectory, FallbackPriceSource, MarketDataSource};

/// Resolves current prices and price history; never fails outward.
pub struct PriceResolver {
    directory: Arc<dyn CollectibleDirectory>,
    source: Arc<dyn MarketDataSource>,
    fallback_source: Arc<dyn FallbackPriceSource>,
}

impl PriceResolver {
    #[must_use]
    pub fn new(
        directory: Arc<dyn CollectibleDirectory>,
        source: Arc<dyn MarketDataSource>,
        fallback_source: Arc<dyn FallbackPriceSource>,
    ) -> Self {
        Self {
            directory,
            source,
            fallback_source,
        }
    }

    /// Current price for `collectible_id`, recording why a fallback was used.
    pub async fn resolve(&self, collectible_id: &CollectibleId) -> Resolution<Decimal> {
        match self.directory.config(collectible_id) {
            Some(config) => self.resolve_configured(&config).await,
            None => self.resolve_unknown(collectible_id).await,
        }
    }

    /// Plain-value form of [`Self::resolve`].
    pub async fn resolve_price(&self, collectible_id: &CollectibleId) -> Decimal {
        self.resolve(collectible_id).await.value()
    }

    async fn resolve_configured(&self, config: &CollectibleConfig) -> Resolution<Decimal> {
        let snapshot = match self.source.latest_snapshot(&config.price_table).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                warn!(
                    collectible = %config.slug,
                    table = %config.price_table,
                    fallback = %config.fallback_price,
                    "Price source returned no records, using fallback price"
                );
                return Resolution::fallback(config.fallback_price, FallbackReason::EmptyResult);
            }
            Err(err) => {
                warn!(
                    collectible = %config.slug,
                    table = %config.price_table,
                    source = self.source.source_name(),
                    error = %err,
                    fallback = %config.fallback_price,
                    "Price source unavailable, using fallback price"
                );
                return Resolution::fallback(
                    config.fallback_price,
                    FallbackReason::Transport(err.to_string()),
                );
            }
        };

        match snapshot.avg_price() {
            Ok(price) => {
                debug!(collectible = %config.slug, price = %price, "Resolved current price");
                Resolution::Resolved(price)
            }
            Err(reason) => {
                warn!(
                    collectible = %config.slug,
                    table = %config.price_table,
                    reason = %reason,
                    fallback = %config.fallback_price,
                    "Price snapshot unusable, using fallback price"
                );
                Resolution::fallback(config.fallback_price, reason)
            }
        }
    }

    async fn resolve_unknown(&self, collectible_id: &CollectibleId) -> Resolution<Decimal> {
        match self.fallback_source.current_price(collectible_id.as_str()).await {
            Ok(Some(price)) => {
                debug!(collectible = %collectible_id, price = %price, "Resolved unconfigured collectible");
                Resolution::Resolved(price)
            }
            Ok(None) => {
                debug!(collectible = %collectible_id, "Generic lookup had no price, using 0");
                Resolution::fallback(Decimal::ZERO, FallbackReason::MissingField)
            }
            Err(err) => {
                debug!(collectible = %collectible_id, error = %err, "Generic lookup failed, using 0");
                Resolution::fallback(Decimal::ZERO, FallbackReason::UnknownCollectible)
            }
        }
    }

    /// The newest `limit` history points, oldest first; empty on any failure.
    pub async fn history(&self, collectible_id: &CollectibleId, limit: usize) -> Vec<PricePoint> {
        let Some(config) = self.directory.config(collectible_id) else {
            debug!(collectible = %collectible_id, "No configuration, empty price history");
            return Vec::new();
        };

        match self.source.price_history(&config.history_table, limit).await {
            Ok(points) => points,
            Err(err) => {
                warn!(
                    collectible = %config.slug,
                    table = %config.history_table,
                    error = %err,
                    "Price history unavailable"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceSnapshot;
    use crate::testkit::domain::{catalog_with, collectible_entry};
    use crate::testkit::source::{ScriptedFallbackSource, ScriptedMarketSource};
    use rust_decimal_macros::dec;

    const UUID: &str = "5f0c2a7e-3b1d-4c55-9e0a-6d2b8f1c4a90";

    fn resolver(
        source: ScriptedMarketSource,
        fallback: ScriptedFallbackSource,
    ) -> PriceResolver {
        let catalog = catalog_with(vec![collectible_entry(UUID, "charizard-base", dec!(16.94))]);
        PriceResolver::new(Arc::new(catalog), Arc::new(source), Arc::new(fallback))
    }

    #[tokio::test]
    async fn resolves_snapshot_price() {
        let source = ScriptedMarketSource::new()
            .with_snapshot("charizard-base_prices", PriceSnapshot::with_avg_price("21.40"));
        let resolver = resolver(source, ScriptedFallbackSource::failing());

        let resolution = resolver.resolve(&CollectibleId::from("charizard-base")).await;
        assert_eq!(resolution, Resolution::Resolved(dec!(21.40)));
    }

    #[tokio::test]
    async fn uuid_and_slug_resolve_identically() {
        let source = ScriptedMarketSource::new()
            .with_snapshot("charizard-base_prices", PriceSnapshot::with_avg_price("21.40"));
        let resolver = resolver(source, ScriptedFallbackSource::failing());

        let by_uuid = resolver.resolve_price(&CollectibleId::from(UUID)).await;
        let by_slug = resolver.resolve_price(&CollectibleId::from("charizard-base")).await;
        assert_eq!(by_uuid, by_slug);
    }

    #[tokio::test]
    async fn status_failure_uses_fallback_price_repeatably() {
        let source = ScriptedMarketSource::new().with_status("charizard-base_prices", 503);
        let resolver = resolver(source, ScriptedFallbackSource::failing());
        let id = CollectibleId::from("charizard-base");

        for _ in 0..3 {
            let resolution = resolver.resolve(&id).await;
            assert!(matches!(resolution.reason(), Some(FallbackReason::Transport(_))));
            assert_eq!(resolution.value(), dec!(16.94));
        }
    }

    #[tokio::test]
    async fn empty_missing_and_unparsable_use_fallback() {
        let id = CollectibleId::from("charizard-base");

        let empty = resolver(ScriptedMarketSource::new(), ScriptedFallbackSource::failing());
        assert_eq!(
            empty.resolve(&id).await,
            Resolution::fallback(dec!(16.94), FallbackReason::EmptyResult)
        );

        let missing = resolver(
            ScriptedMarketSource::new()
                .with_snapshot("charizard-base_prices", PriceSnapshot::default()),
            ScriptedFallbackSource::failing(),
        );
        assert_eq!(
            missing.resolve(&id).await,
            Resolution::fallback(dec!(16.94), FallbackReason::MissingField)
        );

        let garbled = resolver(
            ScriptedMarketSource::new()
                .with_snapshot("charizard-base_prices", PriceSnapshot::with_avg_price("N/A")),
            ScriptedFallbackSource::failing(),
        );
        assert_eq!(
            garbled.resolve(&id).await,
            Resolution::fallback(dec!(16.94), FallbackReason::Unparsable("N/A".into()))
        );
    }

    #[tokio::test]
    async fn unknown_collectible_uses_generic_lookup() {
        let resolver = resolver(
            ScriptedMarketSource::new(),
            ScriptedFallbackSource::with_price("mewtwo-promo", dec!(8.10)),
        );

        let price = resolver.resolve_price(&CollectibleId::from("mewtwo-promo")).await;
        assert_eq!(price, dec!(8.10));
    }

    #[tokio::test]
    async fn unknown_collectible_degrades_to_zero() {
        let resolver = resolver(ScriptedMarketSource::new(), ScriptedFallbackSource::failing());

        let resolution = resolver.resolve(&CollectibleId::from("no-such-card")).await;
        assert_eq!(
            resolution,
            Resolution::fallback(Decimal::ZERO, FallbackReason::UnknownCollectible)
        );
    }

    #[tokio::test]
    async fn history_is_empty_for_unknown_or_failing_sources() {
        let failing = resolver(
            ScriptedMarketSource::new().with_status("charizard-base_history", 500),
            ScriptedFallbackSource::failing(),
        );

        assert!(failing.history(&CollectibleId::from("charizard-base"), 30).await.is_empty());
        assert!(failing.history(&CollectibleId::from("unknown"), 30).await.is_empty());
    }

    #[tokio::test]
    async fn history_is_limited_to_the_newest_points() {
        let points = (1..=5)
            .map(|day| PricePoint {
                recorded_at: format!("2026-10-0{day}"),
                price: Decimal::from(day),
            })
            .collect();
        let resolver = resolver(
            ScriptedMarketSource::new().with_history("charizard-base_history", points),
            ScriptedFallbackSource::failing(),
        );

        let history = resolver.history(&CollectibleId::from(UUID), 3).await;
        let prices: Vec<Decimal> = history.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(3), dec!(4), dec!(5)]);
    }
}

//! End-to-end engine tests over scripted data sources.

mod support;

use std::sync::Arc;

use pricedex::application::engine::PricingEngine;
use pricedex::domain::{FallbackReason, PricePoint, PriceSnapshot, Resolution};
use pricedex::infrastructure::bootstrap::build_engine_with;
use pricedex::infrastructure::config::Config;
use pricedex::port::inbound::PricingService;
use pricedex::testkit::source::{ScriptedFallbackSource, ScriptedMarketSource};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use support::config::{CHARIZARD_ID, OFFLINE_TOML, PIKACHU_ID};
use support::listings::{charizard_offers, offer};

fn engine(source: ScriptedMarketSource, fallback: ScriptedFallbackSource) -> PricingEngine {
    let config = Config::parse_toml(OFFLINE_TOML).expect("valid test config");
    build_engine_with(&config, Arc::new(source), Arc::new(fallback)).expect("engine")
}

#[tokio::test]
async fn resolve_then_select_follows_the_documented_flow() {
    let source = ScriptedMarketSource::new()
        .with_snapshot("charizard_base_prices", PriceSnapshot::with_avg_price("16.94"))
        .with_listings("charizard_base_listings", charizard_offers());
    let engine = engine(source, ScriptedFallbackSource::failing());

    let price = engine.resolve_price("charizard-base").await;
    assert_eq!(price, dec!(16.94));

    // Graded offer is filtered, the window drops $44 and $99, and the warm
    // "fire" image outscores the cool "blue" one.
    let listing = engine.select_listing("charizard-base", price).await.unwrap();
    assert_eq!(listing.total_price, "17.25");
    assert_eq!(listing.external_url, "https://www.ebay.com/itm/302");
    assert_eq!(
        listing.image_url,
        "https://i.ebayimg.com/images/g/fire-holo-s-l1600.webp"
    );
}

#[tokio::test]
async fn heuristic_selection_is_stable_across_cold_and_warm_cache() {
    let source = ScriptedMarketSource::new()
        .with_listings("charizard_base_listings", charizard_offers());
    let engine = engine(source, ScriptedFallbackSource::failing());

    let cold = engine.select_listing(CHARIZARD_ID, dec!(16.94)).await;
    let warm = engine.select_listing("charizard-base", dec!(16.94)).await;
    assert_eq!(cold, warm);
}

#[tokio::test]
async fn price_source_outage_uses_configured_fallback() {
    let source = ScriptedMarketSource::new().with_status("charizard_base_prices", 503);
    let engine = engine(source, ScriptedFallbackSource::failing());

    for id in [CHARIZARD_ID, "charizard-base", "CHARIZARD-BASE"] {
        assert_eq!(engine.resolve_price(id).await, dec!(16.94));
    }
    assert!(matches!(
        engine.resolve_price_detailed("charizard-base").await,
        Resolution::Fallback {
            reason: FallbackReason::Transport(_),
            ..
        }
    ));
}

#[tokio::test]
async fn explicit_price_table_is_used() {
    let source = ScriptedMarketSource::new()
        .with_snapshot("pikachu_promo_prices", PriceSnapshot::with_avg_price("131.5"));
    let engine = engine(source, ScriptedFallbackSource::failing());

    assert_eq!(engine.resolve_price(PIKACHU_ID).await, dec!(131.5));
}

#[tokio::test]
async fn specific_id_category_short_circuits() {
    let source = ScriptedMarketSource::new()
        .with_listings("pikachu_illustrator_listings", charizard_offers());
    let engine = engine(source, ScriptedFallbackSource::failing());

    let listing = engine.select_listing("pikachu-illustrator", dec!(17)).await.unwrap();
    assert_eq!(listing.total_price, "99.00");
    assert_eq!(listing.external_url, "https://www.ebay.com/itm/205537827685");
}

#[tokio::test]
async fn specific_id_without_match_picks_closest_price() {
    let offers = vec![
        offer("1", "110", "Ungraded", "a"),
        offer("2", "121", "Ungraded", "b"),
        offer("3", "140", "Ungraded", "c"),
    ];
    let source = ScriptedMarketSource::new().with_listings("pikachu_illustrator_listings", offers);
    let engine = engine(source, ScriptedFallbackSource::failing());

    let listing = engine.select_listing("pikachu-illustrator", dec!(120)).await.unwrap();
    assert_eq!(listing.total_price, "121");
}

#[tokio::test]
async fn unknown_collectibles_degrade_quietly() {
    let fallback = ScriptedFallbackSource::with_price("mewtwo-promo", dec!(8.10))
        .and_price("no-price", None);
    let engine = engine(ScriptedMarketSource::new(), fallback);

    assert_eq!(engine.resolve_price("mewtwo-promo").await, dec!(8.10));
    assert_eq!(engine.resolve_price("no-price").await, Decimal::ZERO);
    assert_eq!(engine.resolve_price("nothing-at-all").await, Decimal::ZERO);
    assert!(engine.select_listing("mewtwo-promo", dec!(8)).await.is_none());
    assert!(engine.collectible_config("mewtwo-promo").is_none());
    assert!(engine.price_history("mewtwo-promo", 10).await.is_empty());
}

#[tokio::test]
async fn empty_listing_table_selects_nothing() {
    let engine = engine(ScriptedMarketSource::new(), ScriptedFallbackSource::failing());
    assert!(engine.select_listing("charizard-base", dec!(16.94)).await.is_none());
}

#[tokio::test]
async fn history_comes_from_the_history_table() {
    let points = vec![
        PricePoint {
            recorded_at: "2026-10-01".into(),
            price: dec!(15.40),
        },
        PricePoint {
            recorded_at: "2026-10-02".into(),
            price: dec!(16.10),
        },
    ];
    let source = ScriptedMarketSource::new().with_history("charizard_base_history", points.clone());
    let engine = engine(source, ScriptedFallbackSource::failing());

    assert_eq!(engine.price_history("charizard-base", 30).await, points);
    assert_eq!(engine.price_history(CHARIZARD_ID, 1).await, points[1..]);
}

#[test]
fn display_data_is_shared_by_aliases() {
    let engine = engine(ScriptedMarketSource::new(), ScriptedFallbackSource::failing());

    let display = engine.collectible_display_data(CHARIZARD_ID).unwrap();
    assert_eq!(display.name, "Charizard");
    assert_eq!(display.set_label, "Base Set");
    assert_eq!(Some(display), engine.collectible_display_data("charizard-base"));

    let by_uuid = engine.collectible_config(CHARIZARD_ID).unwrap();
    let by_slug = engine.collectible_config("charizard-base").unwrap();
    assert!(Arc::ptr_eq(&by_uuid, &by_slug));
}

#[test]
fn fallback_resolution_is_idempotent() {
    let source = ScriptedMarketSource::new()
        .with_snapshot("charizard_base_prices", PriceSnapshot::with_avg_price("N/A"));
    let engine = engine(source, ScriptedFallbackSource::failing());

    let first = tokio_test::block_on(engine.resolve_price_detailed("charizard-base"));
    let second = tokio_test::block_on(engine.resolve_price_detailed("charizard-base"));
    assert_eq!(first, second);
    assert_eq!(first.value(), dec!(16.94));
}

//! Handlers for the pricing commands.
//!
//! Each handler returns `Ok(false)` when the collectible (or a listing for
//! it) could not be found, so the binary can exit non-zero without treating
//! it as an error.

use rust_decimal::Decimal;
use serde_json::json;

use super::command::{Commands, HistoryArgs, IdArg, ListingArgs};
use super::output;
use crate::application::engine::PricingEngine;
use crate::domain::Resolution;
use crate::error::Result;
use crate::port::inbound::PricingService;

/// Dispatch one command against `engine`.
///
/// # Errors
///
/// Returns an error only when output cannot be serialized.
pub async fn execute(command: &Commands, engine: &PricingEngine, json: bool) -> Result<bool> {
    match command {
        Commands::Price(args) => price(args, engine, json).await,
        Commands::Listing(args) => listing(args, engine).await,
        Commands::Info(args) => info(args, engine, json),
        Commands::History(args) => history(args, engine, json).await,
    }
}

async fn price(args: &IdArg, engine: &PricingEngine, json: bool) -> Result<bool> {
    let resolution = engine.resolve_price_detailed(&args.id).await;
    let fallback = resolution.reason().map(ToString::to_string);
    let price = resolution.value();

    if json {
        output::json(&json!({
            "id": args.id,
            "price": price,
            "fallback": fallback,
        }))?;
    } else {
        output::key_value("Price", price);
        match fallback {
            Some(reason) => output::key_value("Source", format!("fallback ({reason})")),
            None => output::key_value("Source", "marketplace"),
        }
    }
    Ok(true)
}

async fn listing(args: &ListingArgs, engine: &PricingEngine) -> Result<bool> {
    let target = match args.target {
        Some(target) => target,
        None => resolve_target(engine, &args.id).await,
    };

    match engine.select_listing(&args.id, target).await {
        Some(listing) => {
            output::json(&listing)?;
            Ok(true)
        }
        None => {
            output::error(&format!("no listing for '{}' near {target}", args.id));
            Ok(false)
        }
    }
}

async fn resolve_target(engine: &PricingEngine, id: &str) -> Decimal {
    match engine.resolve_price_detailed(id).await {
        Resolution::Resolved(price) => price,
        Resolution::Fallback { value, reason } => {
            tracing::info!(collectible = id, reason = %reason, target = %value, "Target price from fallback");
            value
        }
    }
}

fn info(args: &IdArg, engine: &PricingEngine, json: bool) -> Result<bool> {
    let Some(config) = engine.collectible_config(&args.id) else {
        output::error(&format!("unknown collectible '{}'", args.id));
        return Ok(false);
    };
    let display = engine.collectible_display_data(&args.id);

    if json {
        output::json(&json!({
            "config": &*config,
            "display": display,
        }))?;
        return Ok(true);
    }

    output::section("Collectible");
    output::key_value("ID", &config.id);
    output::key_value("Slug", &config.slug);
    output::key_value("Category", &config.category);
    output::key_value("Fallback price", config.fallback_price);

    output::section("Sources");
    output::key_value("Price", &config.price_table);
    output::key_value("History", &config.history_table);
    output::key_value("Listings", &config.listings_table);

    if let Some(display) = display {
        output::section("Display");
        output::key_value("Name", &display.name);
        output::key_value("Set", &display.set_label);
        output::key_value("Image", &display.image_url);
    }
    Ok(true)
}

async fn history(args: &HistoryArgs, engine: &PricingEngine, json: bool) -> Result<bool> {
    if engine.collectible_config(&args.id).is_none() {
        output::error(&format!("unknown collectible '{}'", args.id));
        return Ok(false);
    }

    let points = engine.price_history(&args.id, args.limit).await;
    if json {
        output::json(&points)?;
    } else if points.is_empty() {
        output::note("(no history)");
    } else {
        for point in &points {
            output::key_value(&point.recorded_at, point.price);
        }
    }
    Ok(true)
}

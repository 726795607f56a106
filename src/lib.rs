//! Pricedex - Listing resolution and price caching for collectibles.
//!
//! For a collectible and a target price the engine resolves an authoritative
//! current price through a tiered fallback chain, selects the single best
//! marketplace listing among noisy candidates, caches per-image heuristic
//! scores with a TTL, and canonicalizes marketplace image and item links.
//!
//! # Architecture
//!
//! - **`domain`** - Marketplace-agnostic types: collectibles, listings, prices, scores
//! - **`port`** - Inbound service trait and outbound data source, cache and scorer traits
//! - **`application`** - Catalog, price resolver, listing selector, heuristics, engine
//! - **`adapter`** - HTTP marketplace client and the operator CLI
//! - **`infrastructure`** - Configuration, logging and the composition root
//!
//! # Example
//!
//! ```no_run
//! use pricedex::infrastructure::bootstrap::build_engine;
//! use pricedex::infrastructure::config::Config;
//! use pricedex::port::inbound::PricingService;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.toml")?;
//! let engine = build_engine(&config)?;
//!
//! let price = engine.resolve_price("charizard-base").await;
//! let listing = engine.select_listing("charizard-base", price).await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`]: Scripted [`MarketDataSource`](crate::port::outbound::MarketDataSource)
//!   and [`FallbackPriceSource`](crate::port::outbound::FallbackPriceSource) doubles.
//! - [`domain`]: Builders for collectibles, catalogs and raw listings.
//! - [`heuristic`]: Call-counting heuristic scorers.
//! - [`clock`]: A manually advanced clock for cache expiry tests.

pub mod clock;
pub mod domain;
pub mod heuristic;
pub mod source;

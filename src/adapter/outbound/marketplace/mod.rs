//! Marketplace data source over HTTP.
//!
//! One client serves both the table-backed data API (listings, snapshots,
//! history) and the generic lookup API used for unconfigured collectibles.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::MarketplaceClient;
pub use settings::{MarketplaceConfig, MarketplaceHttpConfig};

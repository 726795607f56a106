//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the engine's operations.

pub mod cache;
pub mod catalog;
pub mod engine;
pub mod heuristic;
pub mod price;
pub mod selector;
pub mod url;

pub use catalog::{CatalogRecord, CollectibleCatalog};
pub use engine::PricingEngine;
pub use price::PriceResolver;
pub use selector::ListingSelector;
pub use url::{upgrade_image, UrlCanonicalizer};

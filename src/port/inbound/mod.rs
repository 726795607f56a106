//! Inbound (driving) ports consumed by inbound adapters.
//!
//! Callers are UI collaborators, higher-level aggregation code and the
//! operator CLI.

pub mod pricing;

pub use pricing::PricingService;

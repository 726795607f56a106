//! Outbound adapters (driven side).

pub mod marketplace;

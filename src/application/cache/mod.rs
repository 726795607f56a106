//! Runtime caches used by application services.
//!
//! - [`score::InMemoryScoreCache`]: Heuristic scores with read-time TTL expiry

pub mod score;

pub use score::InMemoryScoreCache;

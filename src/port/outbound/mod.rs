//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies such as marketplace
//! data sources, the collectible directory, the score cache and the clock.

pub mod cache;
pub mod directory;
pub mod heuristic;
pub mod market;

pub use cache::{Clock, ScoreCache, SystemClock};
pub use directory::CollectibleDirectory;
pub use heuristic::HeuristicScorer;
pub use market::{FallbackPriceSource, MarketDataSource};

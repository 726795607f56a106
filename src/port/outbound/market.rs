//! Marketplace data source ports.
//!
//! Both endpoints are parameterized by table identifiers stored in
//! [`CollectibleConfig`](crate::domain::CollectibleConfig). Implementations
//! report transport failures and non-success statuses as errors; deciding
//! what to fall back to is the application's job.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{PricePoint, PriceSnapshot, RawListing};
use crate::error::Result;

/// Source of listings, price snapshots and price history.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch every raw listing stored in `table`.
    async fn listings(&self, table: &str) -> Result<Vec<RawListing>>;

    /// Fetch the most recent snapshot in `table`, `None` when empty.
    async fn latest_snapshot(&self, table: &str) -> Result<Option<PriceSnapshot>>;

    /// Fetch the newest `limit` history points from `table`, returned oldest first.
    async fn price_history(&self, table: &str, limit: usize) -> Result<Vec<PricePoint>>;

    /// Return the source name for logging.
    fn source_name(&self) -> &'static str;
}

/// Generic lookup used only for collectibles with no configuration.
#[async_trait]
pub trait FallbackPriceSource: Send + Sync {
    /// Current price for a raw collectible identifier.
    ///
    /// `Ok(None)` means the record exists but carries no usable price.
    async fn current_price(&self, collectible_id: &str) -> Result<Option<Decimal>>;
}

//! Scripted data source doubles.
//!
//! - [`ScriptedMarketSource`]: Per-table listings, snapshots, history and
//!   forced HTTP status failures. Unscripted tables read as empty.
//! - [`ScriptedFallbackSource`]: Generic lookup that either fails or
//!   returns fixed prices.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{PricePoint, PriceSnapshot, RawListing};
use crate::error::{Error, Result};
use crate::port::outbound::{FallbackPriceSource, MarketDataSource};

/// In-memory [`MarketDataSource`] with per-table scripts.
#[derive(Debug, Default)]
pub struct ScriptedMarketSource {
    listings: HashMap<String, Vec<RawListing>>,
    snapshots: HashMap<String, PriceSnapshot>,
    history: HashMap<String, Vec<PricePoint>>,
    statuses: HashMap<String, u16>,
}

impl ScriptedMarketSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_listings(mut self, table: &str, listings: Vec<RawListing>) -> Self {
        self.listings.insert(table.to_string(), listings);
        self
    }

    #[must_use]
    pub fn with_snapshot(mut self, table: &str, snapshot: PriceSnapshot) -> Self {
        self.snapshots.insert(table.to_string(), snapshot);
        self
    }

    /// `points` are oldest first; reads return the newest `limit` of them.
    #[must_use]
    pub fn with_history(mut self, table: &str, points: Vec<PricePoint>) -> Self {
        self.history.insert(table.to_string(), points);
        self
    }

    /// Every request against `table` fails with `status`.
    #[must_use]
    pub fn with_status(mut self, table: &str, status: u16) -> Self {
        self.statuses.insert(table.to_string(), status);
        self
    }

    fn check(&self, table: &str) -> Result<()> {
        match self.statuses.get(table) {
            Some(status) => Err(Error::HttpStatus {
                status: *status,
                url: format!("scripted://{table}"),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MarketDataSource for ScriptedMarketSource {
    async fn listings(&self, table: &str) -> Result<Vec<RawListing>> {
        self.check(table)?;
        Ok(self.listings.get(table).cloned().unwrap_or_default())
    }

    async fn latest_snapshot(&self, table: &str) -> Result<Option<PriceSnapshot>> {
        self.check(table)?;
        Ok(self.snapshots.get(table).cloned())
    }

    async fn price_history(&self, table: &str, limit: usize) -> Result<Vec<PricePoint>> {
        self.check(table)?;
        Ok(self
            .history
            .get(table)
            .map(|points| points[points.len().saturating_sub(limit)..].to_vec())
            .unwrap_or_default())
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

/// [`FallbackPriceSource`] that fails or serves fixed prices.
#[derive(Debug, Default)]
pub struct ScriptedFallbackSource {
    prices: HashMap<String, Option<Decimal>>,
    failing: bool,
}

impl ScriptedFallbackSource {
    /// Every lookup fails with a 404.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            prices: HashMap::new(),
            failing: true,
        }
    }

    /// `collectible_id` resolves to `price`; everything else fails.
    #[must_use]
    pub fn with_price(collectible_id: &str, price: Decimal) -> Self {
        Self::failing().and_price(collectible_id, Some(price))
    }

    /// Add a record; `None` models a record without a usable price.
    #[must_use]
    pub fn and_price(mut self, collectible_id: &str, price: Option<Decimal>) -> Self {
        self.prices.insert(collectible_id.to_string(), price);
        self
    }
}

#[async_trait]
impl FallbackPriceSource for ScriptedFallbackSource {
    async fn current_price(&self, collectible_id: &str) -> Result<Option<Decimal>> {
        match self.prices.get(collectible_id) {
            Some(price) => Ok(*price),
            None if self.failing => Err(Error::HttpStatus {
                status: 404,
                url: format!("scripted://{collectible_id}"),
            }),
            None => Ok(None),
        }
    }
}

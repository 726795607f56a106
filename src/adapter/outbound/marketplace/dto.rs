//! Wire rows returned by the marketplace APIs.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::price::{opt_text_or_number, text_or_number};
use crate::domain::PricePoint;

/// One row of a price history table.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRow {
    #[serde(alias = "recorded_at", alias = "date")]
    pub created_at: String,
    #[serde(alias = "price", deserialize_with = "text_or_number")]
    pub avg_price_with_shipping: String,
}

impl HistoryRow {
    /// Convert to a [`PricePoint`]; `None` when the price is not a decimal.
    #[must_use]
    pub fn into_point(self) -> Option<PricePoint> {
        let price = Decimal::from_str(self.avg_price_with_shipping.trim()).ok()?;
        Some(PricePoint {
            recorded_at: self.created_at,
            price,
        })
    }
}

/// Response of the generic lookup endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRecord {
    #[serde(default, alias = "price", deserialize_with = "opt_text_or_number")]
    pub current_price: Option<String>,
}

impl LookupRecord {
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        self.current_price
            .as_deref()
            .and_then(|raw| Decimal::from_str(raw.trim()).ok())
    }
}

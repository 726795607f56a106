//! Price snapshots, history and fallback-aware resolution.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Most recent summary record from a collectible's current-price source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PriceSnapshot {
    /// Raw field value; the source sends either a JSON number or a string.
    #[serde(default, deserialize_with = "opt_text_or_number")]
    pub avg_price_with_shipping: Option<String>,
}

impl PriceSnapshot {
    /// Snapshot carrying the given raw field.
    pub fn with_avg_price(raw: impl Into<String>) -> Self {
        Self {
            avg_price_with_shipping: Some(raw.into()),
        }
    }

    /// Parse the average price field.
    ///
    /// # Errors
    ///
    /// Returns [`FallbackReason::MissingField`] when the field is absent and
    /// [`FallbackReason::Unparsable`] when it is not a decimal.
    pub fn avg_price(&self) -> Result<Decimal, FallbackReason> {
        let raw = self
            .avg_price_with_shipping
            .as_deref()
            .ok_or(FallbackReason::MissingField)?;
        Decimal::from_str(raw.trim()).map_err(|_| FallbackReason::Unparsable(raw.to_string()))
    }
}

/// One row of a collectible's price history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    pub recorded_at: String,
    pub price: Decimal,
}

/// Why a resolution fell back to a default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Network error or non-success HTTP status.
    Transport(String),
    /// The source answered with no records.
    EmptyResult,
    /// The expected price field was absent.
    MissingField,
    /// The price field was present but not a decimal.
    Unparsable(String),
    /// No configuration exists for the collectible.
    UnknownCollectible,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport failure: {err}"),
            Self::EmptyResult => write!(f, "source returned no records"),
            Self::MissingField => write!(f, "price field missing"),
            Self::Unparsable(raw) => write!(f, "price field not a decimal: {raw:?}"),
            Self::UnknownCollectible => write!(f, "unknown collectible"),
        }
    }
}

/// Outcome of a lookup that never fails outward.
///
/// Callers that only need the value use [`Resolution::value`]; tests and
/// diagnostics can inspect the fallback reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The source produced the value.
    Resolved(T),
    /// A configured default was used instead.
    Fallback { value: T, reason: FallbackReason },
}

impl<T> Resolution<T> {
    /// Fallback to `value` for `reason`.
    pub const fn fallback(value: T, reason: FallbackReason) -> Self {
        Self::Fallback { value, reason }
    }

    /// The carried value regardless of how it was obtained.
    pub fn value(self) -> T {
        match self {
            Self::Resolved(value) | Self::Fallback { value, .. } => value,
        }
    }

    /// Borrow the carried value.
    pub const fn as_value(&self) -> &T {
        match self {
            Self::Resolved(value) | Self::Fallback { value, .. } => value,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// The fallback reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Resolved(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Accept a JSON string or number as text.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

/// Like [`text_or_number`] but keeps `null` as `None`.
pub(crate) fn opt_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}

//! Selection, category and cache settings.
//!
//! ```toml
//! [selection]
//! preferred_condition = "Ungraded"
//! price_tolerance = 5
//! candidate_cap = 2
//!
//! [categories.vintage]
//! mode = "heuristic"
//! price_tolerance = 8
//!
//! [categories.vintage.composition]
//! type = "max_blend"
//! first = "warm"
//! second = "cool"
//! other = "neutral"
//! pair_weight = 0.7
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::cache::score::DEFAULT_SCORE_TTL_SECS;
use crate::domain::selection::DEFAULT_PREFERRED_CONDITION;
use crate::domain::{SelectionMode, SelectionPolicy, SelectionStrategy};
use crate::error::{ConfigError, Result};

/// Global filter defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_preferred_condition")]
    pub preferred_condition: String,
    #[serde(default = "default_price_tolerance")]
    pub price_tolerance: Decimal,
    #[serde(default = "default_candidate_cap")]
    pub candidate_cap: usize,
}

fn default_preferred_condition() -> String {
    DEFAULT_PREFERRED_CONDITION.to_string()
}

fn default_price_tolerance() -> Decimal {
    Decimal::from(5)
}

const fn default_candidate_cap() -> usize {
    2
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            preferred_condition: default_preferred_condition(),
            price_tolerance: default_price_tolerance(),
            candidate_cap: default_candidate_cap(),
        }
    }
}

impl SelectionConfig {
    #[must_use]
    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            preferred_condition: self.preferred_condition.clone(),
            price_tolerance: self.price_tolerance,
            candidate_cap: self.candidate_cap,
        }
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        validate_policy(
            "selection",
            &self.preferred_condition,
            self.price_tolerance,
            self.candidate_cap,
        )
    }
}

/// Mode for one category plus optional overrides of the global filters.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    #[serde(flatten)]
    pub mode: SelectionMode,
    #[serde(default)]
    pub preferred_condition: Option<String>,
    #[serde(default)]
    pub price_tolerance: Option<Decimal>,
    #[serde(default)]
    pub candidate_cap: Option<usize>,
}

impl CategoryConfig {
    /// Strategy with unset overrides taken from `defaults`.
    #[must_use]
    pub fn strategy(&self, defaults: &SelectionConfig) -> SelectionStrategy {
        SelectionStrategy {
            mode: self.mode.clone(),
            policy: SelectionPolicy {
                preferred_condition: self
                    .preferred_condition
                    .clone()
                    .unwrap_or_else(|| defaults.preferred_condition.clone()),
                price_tolerance: self.price_tolerance.unwrap_or(defaults.price_tolerance),
                candidate_cap: self.candidate_cap.unwrap_or(defaults.candidate_cap),
            },
        }
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self, defaults: &SelectionConfig) -> Result<()> {
        match &self.mode {
            SelectionMode::Heuristic { composition } => {
                composition.validate().map_err(|reason| ConfigError::InvalidValue {
                    field: "categories.composition",
                    reason,
                })?;
            }
            SelectionMode::SpecificId { target } if target.trim().is_empty() => {
                return Err(ConfigError::MissingField {
                    field: "categories.target",
                }
                .into());
            }
            _ => {}
        }

        let policy = self.strategy(defaults).policy;
        validate_policy(
            "categories",
            &policy.preferred_condition,
            policy.price_tolerance,
            policy.candidate_cap,
        )
    }
}

#[allow(clippy::result_large_err)]
fn validate_policy(
    field: &'static str,
    preferred_condition: &str,
    price_tolerance: Decimal,
    candidate_cap: usize,
) -> Result<()> {
    if preferred_condition.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "preferred_condition must not be empty".to_string(),
        }
        .into());
    }
    if price_tolerance < Decimal::ZERO {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "price_tolerance must be 0 or greater".to_string(),
        }
        .into());
    }
    if candidate_cap == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "candidate_cap must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Heuristic score cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

const fn default_ttl_secs() -> u64 {
    DEFAULT_SCORE_TTL_SECS
}

/// Upper bound accepted for `ttl_secs` (one year).
pub const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn ttl(&self) -> chrono::Duration {
        let secs = i64::try_from(self.ttl_secs.min(MAX_TTL_SECS)).unwrap_or_default();
        chrono::Duration::seconds(secs)
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        if self.ttl_secs == 0 || self.ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs",
                reason: format!("must be between 1 and {MAX_TTL_SECS}"),
            }
            .into());
        }
        Ok(())
    }
}

//! Listing selection modes and filter policy.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::score::Composition;

/// How candidates are ranked once filtered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Closest price to the target wins.
    #[default]
    Price,
    /// Candidates near the target are ranked by combined visual heuristics.
    Heuristic {
        #[serde(default)]
        composition: Composition,
    },
    /// A candidate whose item reference contains `target` wins outright;
    /// otherwise behaves like [`SelectionMode::Price`].
    SpecificId { target: String },
}

impl SelectionMode {
    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Heuristic { .. } => "heuristic",
            Self::SpecificId { .. } => "specific-id",
        }
    }
}

/// Filter parameters applied before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Condition label preferred by the condition filter.
    pub preferred_condition: String,
    /// Absolute price window around the target (heuristic mode only).
    pub price_tolerance: Decimal,
    /// Maximum number of candidates scored in heuristic mode.
    pub candidate_cap: usize,
}

/// Mode and policy for one collectible category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStrategy {
    pub mode: SelectionMode,
    pub policy: SelectionPolicy,
}

pub const DEFAULT_PREFERRED_CONDITION: &str = "Ungraded";

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            preferred_condition: DEFAULT_PREFERRED_CONDITION.to_string(),
            price_tolerance: Decimal::from(5),
            candidate_cap: 2,
        }
    }
}

//! Visual heuristic scoring types.
//!
//! Heuristic scores are a tie-break signal for listing selection. Each
//! [`ScoreKind`] names one visual property; a [`Composition`] fixes how a
//! collectible category blends several kinds into one score.
//!
//! # Examples
//!
//! ```
//! use pricedex::domain::score::{Composition, ScoreKind};
//!
//! let composition = Composition::Weighted {
//!     components: vec![(ScoreKind::WarmTone, 0.6), (ScoreKind::CoolTone, 0.4)],
//! };
//! assert!(composition.validate().is_ok());
//! assert!((composition.combine(&[1.0, 0.5]) - 0.8).abs() < 1e-9);
//! ```

use std::fmt;

use serde::Deserialize;

/// Named visual property scored from an image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Reds, oranges and golds.
    #[serde(alias = "warm")]
    WarmTone,
    /// Blues, teals and purples.
    #[serde(alias = "cool")]
    CoolTone,
    /// Greys, silvers and monochrome content.
    #[serde(alias = "neutral_tone")]
    Neutral,
}

impl ScoreKind {
    /// Cache key prefix; distinct per kind so heuristics never collide.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WarmTone => "warm",
            Self::CoolTone => "cool",
            Self::Neutral => "neutral",
        }
    }

    /// Cache key for this kind on `image_ref`.
    #[must_use]
    pub fn cache_key(self, image_ref: &str) -> String {
        format!("{}:{}", self.as_str(), image_ref)
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached heuristic score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCacheEntry {
    score: f64,
    computed_at_epoch_millis: i64,
}

impl ScoreCacheEntry {
    /// Create an entry, clamping `score` into `[0, 1]`.
    ///
    /// NaN is stored as `0.0`.
    #[must_use]
    pub fn new(score: f64, computed_at_epoch_millis: i64) -> Self {
        Self {
            score: clamp_unit(score),
            computed_at_epoch_millis,
        }
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub const fn computed_at_epoch_millis(&self) -> i64 {
        self.computed_at_epoch_millis
    }

    /// True once `ttl_millis` have elapsed since the entry was computed.
    #[must_use]
    pub fn is_stale(&self, now_epoch_millis: i64, ttl_millis: i64) -> bool {
        now_epoch_millis.saturating_sub(self.computed_at_epoch_millis) >= ttl_millis
    }
}

/// Clamp into `[0, 1]`, mapping NaN to `0.0`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// How a category blends heuristic kinds into one score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Composition {
    /// `Σ weight × score` over two or three kinds.
    Weighted { components: Vec<(ScoreKind, f64)> },
    /// `max(first, second) × pair_weight + other × (1 − pair_weight)`.
    MaxBlend {
        first: ScoreKind,
        second: ScoreKind,
        other: ScoreKind,
        pair_weight: f64,
    },
}

const WEIGHT_EPSILON: f64 = 1e-9;

impl Composition {
    /// Kinds needed by this composition, in the order [`Self::combine`] expects.
    #[must_use]
    pub fn kinds(&self) -> Vec<ScoreKind> {
        match self {
            Self::Weighted { components } => components.iter().map(|(kind, _)| *kind).collect(),
            Self::MaxBlend {
                first,
                second,
                other,
                ..
            } => vec![*first, *second, *other],
        }
    }

    /// Combine per-kind scores given in [`Self::kinds`] order.
    ///
    /// Missing trailing scores count as `0.0`. The result is clamped.
    #[must_use]
    pub fn combine(&self, scores: &[f64]) -> f64 {
        let at = |i: usize| scores.get(i).copied().unwrap_or(0.0);
        let combined = match self {
            Self::Weighted { components } => components
                .iter()
                .enumerate()
                .map(|(i, (_, weight))| weight * at(i))
                .sum::<f64>(),
            Self::MaxBlend { pair_weight, .. } => {
                at(0).max(at(1)) * pair_weight + at(2) * (1.0 - pair_weight)
            }
        };
        clamp_unit(combined)
    }

    /// Check the composition shape and that weights sum to 1.0.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the composition is invalid.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Weighted { components } => {
                if !(2..=3).contains(&components.len()) {
                    return Err(format!(
                        "weighted composition needs 2 or 3 components, got {}",
                        components.len()
                    ));
                }
                if components.iter().any(|(_, w)| !(0.0..=1.0).contains(w)) {
                    return Err("component weights must be within [0, 1]".into());
                }
                let total: f64 = components.iter().map(|(_, w)| w).sum();
                if (total - 1.0).abs() > WEIGHT_EPSILON {
                    return Err(format!("weights must sum to 1.0, got {total}"));
                }
                Ok(())
            }
            Self::MaxBlend { pair_weight, .. } => {
                if (0.0..=1.0).contains(pair_weight) {
                    Ok(())
                } else {
                    Err(format!("pair_weight must be within [0, 1], got {pair_weight}"))
                }
            }
        }
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::Weighted {
            components: vec![(ScoreKind::WarmTone, 0.6), (ScoreKind::CoolTone, 0.4)],
        }
    }
}

//! Heuristic scorer doubles.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::port::outbound::HeuristicScorer;

/// Scorer with scripted results that counts how often it is invoked.
///
/// Scores come from the first key contained in the image reference, or the
/// default when no key matches.
#[derive(Debug, Default)]
pub struct CountingScorer {
    keyed: Vec<(String, f64)>,
    default: f64,
    calls: AtomicUsize,
}

impl CountingScorer {
    /// Same score for every image.
    #[must_use]
    pub fn constant(score: f64) -> Self {
        Self {
            keyed: Vec::new(),
            default: score,
            calls: AtomicUsize::new(0),
        }
    }

    /// Per-substring scores with a default.
    #[must_use]
    pub fn keyed(scores: &[(&str, f64)], default: f64) -> Self {
        Self {
            keyed: scores
                .iter()
                .map(|(key, score)| ((*key).to_string(), *score))
                .collect(),
            default,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `score` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeuristicScorer for CountingScorer {
    async fn score(&self, image_ref: &str) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keyed
            .iter()
            .find(|(key, _)| image_ref.contains(key.as_str()))
            .map_or(self.default, |(_, score)| *score)
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

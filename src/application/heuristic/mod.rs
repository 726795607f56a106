//! Visual heuristic scorers.
//!
//! - [`token::TokenHeuristic`]: Deterministic placeholder scoring from the image file name
//! - [`cached::CachedScorer`]: Wraps any scorer with the TTL score cache
//! - [`combined::CombinedScorer`]: Fixed-weight blend of several kinds
//! - [`HeuristicSet`]: One scorer per [`ScoreKind`], shared by every combination

pub mod cached;
pub mod combined;
pub mod token;

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ScoreKind;
use crate::port::outbound::{HeuristicScorer, ScoreCache};

pub use cached::CachedScorer;
pub use combined::CombinedScorer;
pub use token::TokenHeuristic;

const ALL_KINDS: [ScoreKind; 3] = [ScoreKind::WarmTone, ScoreKind::CoolTone, ScoreKind::Neutral];

/// Registry of per-kind scorers.
#[derive(Clone, Default)]
pub struct HeuristicSet {
    scorers: HashMap<ScoreKind, Arc<dyn HeuristicScorer>>,
}

impl HeuristicSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder scorers for every kind, each wrapped by `cache`.
    #[must_use]
    pub fn placeholder(cache: Arc<dyn ScoreCache>) -> Self {
        ALL_KINDS.iter().fold(Self::new(), |set, &kind| {
            let inner = Arc::new(TokenHeuristic::new(kind));
            set.with_scorer(kind, Arc::new(CachedScorer::new(kind, inner, cache.clone())))
        })
    }

    /// Register (or replace) the scorer for `kind`.
    #[must_use]
    pub fn with_scorer(mut self, kind: ScoreKind, scorer: Arc<dyn HeuristicScorer>) -> Self {
        self.scorers.insert(kind, scorer);
        self
    }

    #[must_use]
    pub fn get(&self, kind: ScoreKind) -> Option<Arc<dyn HeuristicScorer>> {
        self.scorers.get(&kind).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scorers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }
}

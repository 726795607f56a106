//! Cache wrapper for heuristic scorers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::score::clamp_unit;
use crate::domain::ScoreKind;
use crate::port::outbound::{HeuristicScorer, ScoreCache};

/// Consults the score cache before delegating to the inner scorer.
///
/// Keys are `"{kind}:{image_ref}"`, so different kinds on the same image never
/// collide. Concurrent misses on one key may both compute; the inner scorer is
/// deterministic so the overwrite is harmless.
pub struct CachedScorer {
    kind: ScoreKind,
    inner: Arc<dyn HeuristicScorer>,
    cache: Arc<dyn ScoreCache>,
}

impl CachedScorer {
    #[must_use]
    pub fn new(kind: ScoreKind, inner: Arc<dyn HeuristicScorer>, cache: Arc<dyn ScoreCache>) -> Self {
        Self { kind, inner, cache }
    }
}

#[async_trait]
impl HeuristicScorer for CachedScorer {
    async fn score(&self, image_ref: &str) -> f64 {
        let key = self.kind.cache_key(image_ref);
        if let Some(entry) = self.cache.get(&key) {
            trace!(key = %key, scorer = self.inner.name(), score = entry.score(), "Heuristic cache hit");
            return entry.score();
        }

        let score = clamp_unit(self.inner.score(image_ref).await);
        self.cache.set(&key, score);
        trace!(key = %key, scorer = self.inner.name(), score, "Heuristic cache miss, stored");
        score
    }

    fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cache::InMemoryScoreCache;
    use crate::application::heuristic::TokenHeuristic;
    use crate::testkit::heuristic::CountingScorer;

    #[tokio::test]
    async fn cold_and_warm_reads_agree() {
        let cache = Arc::new(InMemoryScoreCache::default());
        let inner = Arc::new(TokenHeuristic::new(ScoreKind::WarmTone));
        let scorer = CachedScorer::new(ScoreKind::WarmTone, inner.clone(), cache.clone());
        let image = "https://i.example/g/a/charmander-orange.jpg";

        let cold = scorer.score(image).await;
        let warm = scorer.score(image).await;

        assert_eq!(cold, warm);
        assert_eq!(cold, inner.score_sync(image));
        assert_eq!(cache.get(&format!("warm:{image}")).map(|e| e.score()), Some(cold));
    }

    #[tokio::test]
    async fn inner_scorer_runs_once_while_fresh() {
        let cache = Arc::new(InMemoryScoreCache::default());
        let inner = Arc::new(CountingScorer::constant(0.3));
        let scorer = CachedScorer::new(ScoreKind::CoolTone, inner.clone(), cache);

        scorer.score("a.jpg").await;
        scorer.score("a.jpg").await;
        scorer.score("b.jpg").await;

        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test]
    async fn kinds_use_separate_keys() {
        let cache = Arc::new(InMemoryScoreCache::default());
        let warm = CachedScorer::new(
            ScoreKind::WarmTone,
            Arc::new(CountingScorer::constant(0.9)),
            cache.clone(),
        );
        let cool = CachedScorer::new(
            ScoreKind::CoolTone,
            Arc::new(CountingScorer::constant(0.1)),
            cache.clone(),
        );

        assert_eq!(warm.score("same.jpg").await, 0.9);
        assert_eq!(cool.score("same.jpg").await, 0.1);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn out_of_range_inner_scores_are_clamped() {
        let cache = Arc::new(InMemoryScoreCache::default());
        let scorer = CachedScorer::new(
            ScoreKind::Neutral,
            Arc::new(CountingScorer::constant(1.4)),
            cache,
        );

        assert_eq!(scorer.score("x.jpg").await, 1.0);
    }
}

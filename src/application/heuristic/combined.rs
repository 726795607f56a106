//! Fixed-weight combination of heuristic kinds.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::warn;

use super::HeuristicSet;
use crate::domain::{Composition, ScoreKind};
use crate::port::outbound::HeuristicScorer;

/// Blends several per-kind scorers according to a [`Composition`].
///
/// Component scores for one image are computed concurrently and awaited
/// together.
pub struct CombinedScorer {
    composition: Composition,
    components: Vec<(ScoreKind, Option<Arc<dyn HeuristicScorer>>)>,
}

impl CombinedScorer {
    #[must_use]
    pub fn new(composition: Composition, set: &HeuristicSet) -> Self {
        let components = composition
            .kinds()
            .into_iter()
            .map(|kind| (kind, set.get(kind)))
            .collect();
        Self {
            composition,
            components,
        }
    }
}

#[async_trait]
impl HeuristicScorer for CombinedScorer {
    async fn score(&self, image_ref: &str) -> f64 {
        let scores = join_all(self.components.iter().map(|(kind, scorer)| async move {
            match scorer {
                Some(scorer) => scorer.score(image_ref).await,
                None => {
                    warn!(kind = %kind, "No scorer registered for heuristic kind, using 0");
                    0.0
                }
            }
        }))
        .await;

        self.composition.combine(&scores)
    }

    fn name(&self) -> &'static str {
        "combined"
    }
}

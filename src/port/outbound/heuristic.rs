//! Visual heuristic scorer port.

use async_trait::async_trait;

/// Deterministic `image_ref -> [0, 1]` scorer for one visual property.
///
/// The placeholder implementation derives its score from the reference text;
/// a real image-analysis backend can replace it behind this trait without
/// callers noticing.
#[async_trait]
pub trait HeuristicScorer: Send + Sync {
    /// Score `image_ref`. Implementations must return the same value for the
    /// same input and stay within `[0, 1]`.
    async fn score(&self, image_ref: &str) -> f64;

    /// Short name for log fields. Cache keys come from the score kind instead.
    fn name(&self) -> &'static str;
}

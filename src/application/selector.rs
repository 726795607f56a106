//! Listing selection.
//!
//! Picks exactly one listing out of the raw candidates for a target price:
//!
//! 1. Empty input → `None`
//! 2. Condition filter (falls back to all candidates when nothing matches)
//! 3. Heuristic mode: price window around the target (falls back to step 2)
//! 4. Heuristic mode: keep only the first `candidate_cap` candidates
//! 5. Score by price distance, combined heuristics, or specific item id
//! 6. Stable sort: score descending, then price distance ascending
//! 7. Canonicalize the winner's image and item links
//!
//! Every filter step falls back to its input rather than emptying the pool,
//! so non-empty input always yields a listing.

use std::cmp::Ordering;

use futures_util::future::join_all;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::heuristic::{CombinedScorer, HeuristicSet};
use super::url::{upgrade_image, UrlCanonicalizer};
use crate::domain::{RawListing, ResolvedListing, SelectionMode, SelectionPolicy};
use crate::port::outbound::HeuristicScorer;

/// A candidate with its ranking signals.
#[derive(Debug, Clone, Copy)]
struct Ranked<'a> {
    listing: &'a RawListing,
    score: f64,
    distance: Option<Decimal>,
}

/// Stateless listing selector; the only shared state is the score cache
/// behind the heuristic scorers.
pub struct ListingSelector {
    canonicalizer: UrlCanonicalizer,
    heuristics: HeuristicSet,
}

impl ListingSelector {
    #[must_use]
    pub fn new(canonicalizer: UrlCanonicalizer, heuristics: HeuristicSet) -> Self {
        Self {
            canonicalizer,
            heuristics,
        }
    }

    /// Select the best listing for `target` among `raw_listings`.
    pub async fn select(
        &self,
        collectible_id: &str,
        target: Decimal,
        raw_listings: &[RawListing],
        mode: &SelectionMode,
        policy: &SelectionPolicy,
    ) -> Option<ResolvedListing> {
        if raw_listings.is_empty() {
            debug!(collectible = collectible_id, "No candidate listings");
            return None;
        }

        let mut pool = prefer_condition(raw_listings, &policy.preferred_condition);

        let ranked = match mode {
            SelectionMode::Price => rank_by_price(&pool, target),
            SelectionMode::SpecificId { target: item } => {
                if let Some(hit) = find_item(&pool, item) {
                    info!(
                        collectible = collectible_id,
                        item = %item,
                        "Selected listing by specific item id"
                    );
                    return Some(self.resolve(hit));
                }
                rank_by_price(&pool, target)
            }
            SelectionMode::Heuristic { composition } => {
                pool = within_window(pool, target, policy.price_tolerance);
                pool.truncate(policy.candidate_cap.max(1));
                let scorer = CombinedScorer::new(composition.clone(), &self.heuristics);
                rank_by_heuristic(&pool, target, &scorer).await
            }
        };

        let winner = top(ranked)?;
        debug!(
            collectible = collectible_id,
            mode = mode.label(),
            candidates = raw_listings.len(),
            score = winner.score,
            price = %winner.listing.total_price,
            "Selected listing"
        );
        Some(self.resolve(winner.listing))
    }

    fn resolve(&self, listing: &RawListing) -> ResolvedListing {
        ResolvedListing {
            image_url: upgrade_image(&listing.image_ref),
            external_url: self.canonicalizer.canonicalize_item_url(&listing.item_ref),
            total_price: listing.total_price.clone(),
            seller_name: listing.seller_name.clone(),
        }
    }
}

/// Candidates with the preferred condition, or all of them if none match.
fn prefer_condition<'a>(listings: &'a [RawListing], preferred: &str) -> Vec<&'a RawListing> {
    let matching: Vec<&RawListing> = listings
        .iter()
        .filter(|listing| listing.has_condition(preferred))
        .collect();
    if matching.is_empty() {
        listings.iter().collect()
    } else {
        matching
    }
}

/// Candidates priced within `tolerance` of `target`, or the input if none are.
fn within_window(pool: Vec<&RawListing>, target: Decimal, tolerance: Decimal) -> Vec<&RawListing> {
    let windowed: Vec<&RawListing> = pool
        .iter()
        .copied()
        .filter(|listing| {
            listing
                .distance_to(target)
                .is_some_and(|distance| distance <= tolerance)
        })
        .collect();
    if windowed.is_empty() {
        pool
    } else {
        windowed
    }
}

fn find_item<'a>(pool: &[&'a RawListing], item: &str) -> Option<&'a RawListing> {
    if item.is_empty() {
        return None;
    }
    pool.iter().copied().find(|listing| listing.item_ref.contains(item))
}

fn rank_by_price<'a>(pool: &[&'a RawListing], target: Decimal) -> Vec<Ranked<'a>> {
    pool.iter()
        .copied()
        .map(|listing| {
            let distance = listing.distance_to(target);
            let score = distance
                .and_then(|d| d.to_f64())
                .map_or(f64::NEG_INFINITY, |d| -d);
            Ranked {
                listing,
                score,
                distance,
            }
        })
        .collect()
}

async fn rank_by_heuristic<'a>(
    pool: &[&'a RawListing],
    target: Decimal,
    scorer: &CombinedScorer,
) -> Vec<Ranked<'a>> {
    let scores = join_all(pool.iter().map(|listing| async move {
        let image = upgrade_image(&listing.image_ref);
        scorer.score(&image).await
    }))
    .await;

    pool.iter()
        .copied()
        .zip(scores)
        .map(|(listing, score)| Ranked {
            listing,
            score,
            distance: listing.distance_to(target),
        })
        .collect()
}

/// Highest score first; ties go to the closer price, then to input order.
fn top(mut ranked: Vec<Ranked<'_>>) -> Option<Ranked<'_>> {
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| compare_distance(a.distance, b.distance))
    });
    ranked.into_iter().next()
}

fn compare_distance(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

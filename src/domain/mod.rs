//! Marketplace-agnostic domain types.
//!
//! - [`collectible`] - Collectible configuration and display data
//! - [`listing`] - Raw marketplace offers and the resolved listing shown to callers
//! - [`price`] - Price snapshots, history points and the fallback-aware [`Resolution`]
//! - [`score`] - Visual heuristic kinds, cache entries and scorer composition
//! - [`selection`] - Listing selection modes and the per-category policy

pub mod collectible;
pub mod id;
pub mod listing;
pub mod price;
pub mod score;
pub mod selection;

pub use collectible::{CollectibleConfig, CollectibleDisplayData};
pub use id::CollectibleId;
pub use listing::{RawListing, ResolvedListing};
pub use price::{FallbackReason, PricePoint, PriceSnapshot, Resolution};
pub use score::{Composition, ScoreCacheEntry, ScoreKind};
pub use selection::{SelectionMode, SelectionPolicy, SelectionStrategy};

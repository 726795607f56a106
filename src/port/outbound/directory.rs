//! Config provider port.

use std::sync::Arc;

use crate::domain::{CollectibleConfig, CollectibleDisplayData, CollectibleId};

/// Synchronous lookup of collectible configuration by UUID or slug.
///
/// Any alias of the same collectible must resolve to the same record.
pub trait CollectibleDirectory: Send + Sync {
    fn config(&self, id: &CollectibleId) -> Option<Arc<CollectibleConfig>>;

    fn display(&self, id: &CollectibleId) -> Option<CollectibleDisplayData>;
}

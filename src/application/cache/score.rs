//! In-memory heuristic score cache with lazy TTL expiry.

use std::sync::Arc;

use chrono::Duration;
use dashmap::DashMap;

use crate::domain::ScoreCacheEntry;
use crate::port::outbound::{Clock, ScoreCache, SystemClock};

/// Scores are valid for a day unless configured otherwise.
pub const DEFAULT_SCORE_TTL_SECS: u64 = 24 * 60 * 60;

/// Thread-safe score cache keyed by `"{kind}:{image_ref}"`.
///
/// Entries are never swept; a stale entry is simply reported as absent and
/// overwritten by the next `set`.
pub struct InMemoryScoreCache {
    entries: DashMap<String, ScoreCacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl InMemoryScoreCache {
    /// Create a cache with the given TTL and the system clock.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache reading time from `clock`.
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Number of stored entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryScoreCache {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_SCORE_TTL_SECS as i64))
    }
}

impl ScoreCache for InMemoryScoreCache {
    fn get(&self, key: &str) -> Option<ScoreCacheEntry> {
        let entry = *self.entries.get(key)?;
        let now = self.clock.now_epoch_millis();
        if entry.is_stale(now, self.ttl.num_milliseconds()) {
            return None;
        }
        Some(entry)
    }

    fn set(&self, key: &str, score: f64) {
        let entry = ScoreCacheEntry::new(score, self.clock.now_epoch_millis());
        self.entries.insert(key.to_string(), entry);
    }
}

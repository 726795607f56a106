//! Score cache and clock ports.
//!
//! The cache is injected rather than held in module state so tests can pair
//! it with a controllable [`Clock`] and check expiry deterministically.

use crate::domain::ScoreCacheEntry;

/// Source of the current time in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> i64;
}

/// Wall clock backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Key → score store with read-time expiry.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Concurrent writers to one key are
/// allowed; the last write wins.
pub trait ScoreCache: Send + Sync {
    /// Fresh entry for `key`. Stale and never-set keys both return `None`.
    fn get(&self, key: &str) -> Option<ScoreCacheEntry>;

    /// Store `score` (clamped) stamped with the current time.
    fn set(&self, key: &str, score: f64);
}

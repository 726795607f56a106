//! Manually advanced [`Clock`].

use std::sync::atomic::{AtomicI64, Ordering};

use crate::port::outbound::Clock;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Start at `epoch_millis`.
    #[must_use]
    pub fn new(epoch_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(epoch_millis),
        }
    }

    /// Move forward by `millis`.
    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

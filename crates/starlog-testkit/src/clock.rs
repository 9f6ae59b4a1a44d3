//! Manually driven clock for window tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use starlog::Clock;

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a fixture can hand one
/// copy to the registry and keep another to advance time mid-test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Start at the given epoch second.
    pub fn at(now: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now)),
        }
    }

    /// Advance by the given number of seconds.
    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jump to the given epoch second.
    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

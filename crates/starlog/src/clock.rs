//! Wall-clock seconds source.
//!
//! Time is an external collaborator: the chain stamps blocks and the
//! registry measures challenge windows through this trait, so tests can
//! drive it manually.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, truncated.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_secs() as i64
    }
}

// Rust guideline compliant 2026-10-12

//! Wall-clock sources.
//!
//! Every operation reads `now` exactly once from a [`Clock`] and uses that value
//! for all of its predicates. Tests inject a [`ManualClock`] so expiry and purge
//! scenarios never depend on real sleeping.

use std::sync::atomic::{AtomicI64, Ordering};

/// A source of Unix timestamps in seconds.
pub trait Clock: Send + Sync {
    /// Returns the current Unix timestamp in seconds.
    fn now(&self) -> i64;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually driven clock for tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    /// Moves the clock to an absolute timestamp.
    pub fn set(&self, timestamp: i64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs` and returns the new time.
    pub fn advance(&self, secs: i64) -> i64 {
        self.now.fetch_add(secs, Ordering::SeqCst) + secs
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

//! Time sources for operation timestamps
//!
//! Operations are ordered by timestamp alone, so the clock must never hand out
//! an instant earlier than one it already returned. [`SystemClock`] enforces
//! that on top of wall-clock time; [`ManualClock`] lets tests control time.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use parking_lot::Mutex;
use std::fmt::Debug;

/// Source of operation timestamps
pub trait Clock: Send + Sync + Debug {
    /// Current instant, never earlier than any previous result
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time at millisecond precision, clamped to be monotonic
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Mutex<DateTime<Utc>>,
}

impl SystemClock {
    /// Create new system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let sampled = Utc::now().trunc_subsecs(3);
        let mut last = self.last.lock();
        if sampled > *last {
            *last = sampled;
        }
        *last
    }
}

/// Manually driven clock for deterministic tests
#[derive(Debug, Default)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        if by > Duration::zero() {
            *current += by;
        }
    }

    /// Jump to `instant`; earlier instants are ignored
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock();
        if instant > *current {
            *current = instant;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}

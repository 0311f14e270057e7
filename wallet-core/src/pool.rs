//! Supply pool
//!
//! Tracks the minimal units not yet issued into any wallet. Every wallet is
//! bound to the pool it was issued from and returns its balance there when
//! dropped.
//!
//! # Invariants
//!
//! - `available + Σ(live wallet balances) == total_supply` at all times
//! - A debit either succeeds in full or leaves the counter untouched
//!
//! Debit and credit are single atomic read-modify-write steps, so a pool can
//! be shared across threads. Pools are explicit values: independent pools never
//! see each other's units.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::config::{ClockKind, Config};
use crate::types::{Units, TOTAL_SUPPLY};
use crate::{Error, Result};

/// Handle to a supply pool
///
/// Cloning the handle shares the same pool.
#[derive(Debug, Clone)]
pub struct SupplyPool {
    inner: Arc<PoolInner>,
}

#[derive(Debug)]
struct PoolInner {
    total_supply: Units,
    available: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl SupplyPool {
    /// Create pool holding `total_supply` units, stamped by the system clock
    pub fn new(total_supply: Units) -> Self {
        Self::with_clock(total_supply, Arc::new(SystemClock::new()))
    }

    /// Create pool with an explicit time source
    pub fn with_clock(total_supply: Units, clock: Arc<dyn Clock>) -> Self {
        tracing::debug!(total_supply = total_supply.raw(), "Supply pool created");
        Self {
            inner: Arc::new(PoolInner {
                total_supply,
                available: AtomicU64::new(total_supply.raw()),
                clock,
            }),
        }
    }

    /// Create pool from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let clock: Arc<dyn Clock> = match config.pool.clock {
            ClockKind::System => Arc::new(SystemClock::new()),
            ClockKind::Manual => Arc::new(ManualClock::default()),
        };
        Ok(Self::with_clock(Units::new(config.total_supply_units), clock))
    }

    /// Units the pool started with
    pub fn total_supply(&self) -> Units {
        self.inner.total_supply
    }

    /// Units not in circulation
    pub fn available(&self) -> Units {
        Units::new(self.inner.available.load(Ordering::SeqCst))
    }

    /// Units currently held by wallets
    pub fn in_circulation(&self) -> Units {
        Units::new(self.inner.total_supply.raw() - self.inner.available.load(Ordering::SeqCst))
    }

    /// Timestamp for a new operation
    pub fn now(&self) -> DateTime<Utc> {
        self.inner.clock.now()
    }

    /// True if both handles refer to the same pool
    pub fn same_pool(&self, other: &SupplyPool) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Take `units` out of the pool
    pub(crate) fn debit(&self, units: Units) -> Result<()> {
        let requested = units.raw();
        self.inner
            .available
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |available| {
                available.checked_sub(requested)
            })
            .map(|_| ())
            .map_err(|available| {
                tracing::warn!(requested, available, "Supply pool debit rejected");
                Error::SupplyExceeded {
                    requested,
                    available,
                }
            })
    }

    /// Return `units` to the pool
    pub(crate) fn credit(&self, units: Units) {
        if units.is_zero() {
            return;
        }
        let previous = self.inner.available.fetch_add(units.raw(), Ordering::SeqCst);
        debug_assert!(previous + units.raw() <= self.inner.total_supply.raw());
    }
}

impl Default for SupplyPool {
    /// Pool holding the full 21 million coin supply
    fn default() -> Self {
        Self::new(TOTAL_SUPPLY)
    }
}

//! Wallet value type
//!
//! A [`Wallet`] owns a balance issued from a [`SupplyPool`] and the log of
//! every balance it ever had. Units move only through the methods below; a
//! wallet cannot be cloned, so a balance always has exactly one owner.
//!
//! # Invariants
//!
//! - `balance <= pool.total_supply()`
//! - `history` is never empty and its last entry records the current balance
//! - Dropping a wallet returns its remaining balance to its pool exactly once
//!
//! Every error is detected before any balance or pool counter changes.
//!
//! Copying is rejected by the compiler:
//!
//! ```compile_fail
//! use wallet_core::{SupplyPool, Wallet};
//!
//! let pool = SupplyPool::default();
//! let wallet = Wallet::from_coins(&pool, 1).unwrap();
//! let copy = wallet.clone();
//! ```
//!
//! and so is construction from any numeric type other than `i32`, `u32`,
//! `i64` or `u64`:
//!
//! ```compile_fail
//! use wallet_core::{SupplyPool, Wallet};
//!
//! let pool = SupplyPool::default();
//! let wallet = Wallet::from_coins(&pool, 1.5f64);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Index, Mul, Sub};

use crate::operation::{History, Operation};
use crate::parse::{parse_binary, parse_decimal};
use crate::pool::SupplyPool;
use crate::types::{Coins, Units, UNITS_PER_COIN};
use crate::{Error, Result};

/// Fixed-point currency holder with an append-only balance history
#[derive(Debug)]
pub struct Wallet {
    balance: Units,
    history: History,
    pool: SupplyPool,
}

impl Wallet {
    /// Zero wallet; nothing is taken from the pool
    pub fn empty(pool: &SupplyPool) -> Self {
        Self {
            balance: Units::ZERO,
            history: History::starting_with(Operation::new(Units::ZERO, pool.now())),
            pool: pool.clone(),
        }
    }

    /// Issue `coins` whole coins from the pool
    pub fn from_coins(pool: &SupplyPool, coins: impl Coins) -> Result<Self> {
        let coins = coins.to_coins()?;
        let units = Units::from_coins(coins).ok_or_else(|| Error::SupplyExceeded {
            requested: coins.saturating_mul(UNITS_PER_COIN),
            available: pool.available().raw(),
        })?;
        Self::from_units(pool, units)
    }

    /// Issue an exact number of minimal units from the pool
    pub fn from_units(pool: &SupplyPool, units: Units) -> Result<Self> {
        pool.debit(units)?;
        tracing::debug!(units = units.raw(), "Wallet issued");
        Ok(Self {
            balance: units,
            history: History::starting_with(Operation::new(units, pool.now())),
            pool: pool.clone(),
        })
    }

    /// Issue a decimal coin amount such as `"0.5"` or `"12,25"`
    pub fn parse(pool: &SupplyPool, text: &str) -> Result<Self> {
        Self::from_units(pool, parse_decimal(text)?)
    }

    /// Issue a binary count of minimal units such as `"1010"`
    pub fn from_binary(pool: &SupplyPool, text: &str) -> Result<Self> {
        Self::from_units(pool, parse_binary(text)?)
    }

    /// Combine two wallets into a new one.
    ///
    /// The new balance is the sum of both, and the new history is both
    /// histories merged by timestamp followed by one entry for the merged
    /// balance. No units are issued or returned.
    ///
    /// If the wallets come from different pools, both are dropped and each
    /// returns its balance to its own pool.
    pub fn merge(mut first: Wallet, mut second: Wallet) -> Result<Wallet> {
        first.ensure_same_pool(&second)?;
        let balance = first.checked_sum(&second)?;

        let left = std::mem::take(&mut first.history);
        let right = std::mem::take(&mut second.history);
        first.balance = Units::ZERO;
        second.balance = Units::ZERO;

        let pool = first.pool.clone();
        let closing = Operation::new(balance, pool.now());
        let history = History::merge(left, right, closing);
        tracing::debug!(units = balance.raw(), entries = history.len(), "Wallets merged");

        Ok(Wallet {
            balance,
            history,
            pool,
        })
    }

    /// Move balance and history into a new wallet.
    ///
    /// The returned wallet logs the adopted balance. `self` is left at zero
    /// with a fresh history, so dropping it returns nothing to the pool.
    pub fn relocate(&mut self) -> Wallet {
        let fresh = History::starting_with(Operation::new(Units::ZERO, self.pool.now()));
        let mut target = Wallet {
            balance: std::mem::take(&mut self.balance),
            history: std::mem::replace(&mut self.history, fresh),
            pool: self.pool.clone(),
        };
        target.record();
        target
    }

    /// Move all of `other`'s units into `self` (`self += other`)
    pub fn absorb(&mut self, other: &mut Wallet) -> Result<()> {
        self.ensure_same_pool(other)?;
        let balance = self.checked_sum(other)?;
        let moved = std::mem::replace(&mut other.balance, Units::ZERO);
        self.balance = balance;

        self.record();
        other.record();
        tracing::debug!(units = moved.raw(), "Wallet absorbed");
        Ok(())
    }

    /// Pay `other`'s current balance from `self` to `other` (`self -= other`).
    ///
    /// `self` loses `other.units()` and `other` gains the same amount, so
    /// `other` ends up with twice its previous balance and the pool is
    /// untouched. Fails with [`Error::InsufficientFunds`] when `other` holds
    /// more than `self`.
    pub fn pay_into(&mut self, other: &mut Wallet) -> Result<()> {
        self.ensure_same_pool(other)?;
        let amount = other.balance;
        let remaining = self.withdrawable(amount)?;
        let credited = other.balance.checked_add(amount).ok_or(Error::SupplyExceeded {
            requested: amount.raw(),
            available: self.pool.available().raw(),
        })?;

        self.balance = remaining;
        other.balance = credited;
        self.record();
        other.record();
        tracing::debug!(units = amount.raw(), "Wallet paid");
        Ok(())
    }

    /// Multiply the balance by `factor` (`self *= factor`).
    ///
    /// `0` returns the whole balance to the pool; a positive factor draws
    /// `balance × (factor − 1)` from it.
    pub fn scale(&mut self, factor: i32) -> Result<()> {
        let factor = u64::try_from(factor).map_err(|_| Error::NegativeAmount(i64::from(factor)))?;

        if factor == 0 {
            let drained = std::mem::replace(&mut self.balance, Units::ZERO);
            self.pool.credit(drained);
        } else {
            let scaled = self.balance.checked_mul(factor).ok_or_else(|| Error::SupplyExceeded {
                requested: self.balance.raw().saturating_mul(factor - 1),
                available: self.pool.available().raw(),
            })?;
            let extra = Units::new(scaled.raw() - self.balance.raw());
            self.pool.debit(extra)?;
            self.balance = scaled;
        }

        self.record();
        Ok(())
    }

    /// Balance in minimal units
    pub fn units(&self) -> Units {
        self.balance
    }

    /// Balance as whole coins and minimal-unit remainder
    pub fn coins(&self) -> (u64, u64) {
        self.balance.split_coins()
    }

    /// `index`-th logged operation, oldest first
    pub fn operation(&self, index: usize) -> Result<&Operation> {
        self.history.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.history.len(),
        })
    }

    /// Every logged operation, oldest first
    pub fn history(&self) -> &[Operation] {
        self.history.as_slice()
    }

    /// Number of logged operations
    pub fn op_count(&self) -> usize {
        self.history.len()
    }

    /// Pool this wallet was issued from
    pub fn pool(&self) -> &SupplyPool {
        &self.pool
    }

    fn record(&mut self) {
        let operation = Operation::new(self.balance, self.pool.now());
        self.history.push(operation);
    }

    fn ensure_same_pool(&self, other: &Wallet) -> Result<()> {
        if self.pool.same_pool(&other.pool) {
            Ok(())
        } else {
            Err(Error::PoolMismatch)
        }
    }

    fn checked_sum(&self, other: &Wallet) -> Result<Units> {
        self.balance
            .checked_add(other.balance)
            .ok_or(Error::SupplyExceeded {
                requested: other.balance.raw(),
                available: self.pool.available().raw(),
            })
    }

    fn withdrawable(&self, amount: Units) -> Result<Units> {
        self.balance.checked_sub(amount).ok_or_else(|| {
            tracing::warn!(
                needed = amount.raw(),
                available = self.balance.raw(),
                "Wallet payment rejected"
            );
            Error::InsufficientFunds {
                needed: amount.raw(),
                available: self.balance.raw(),
            }
        })
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        if !self.balance.is_zero() {
            tracing::debug!(units = self.balance.raw(), "Wallet returned to pool");
        }
        self.pool.credit(std::mem::take(&mut self.balance));
    }
}

impl Add<Wallet> for Wallet {
    type Output = Result<Wallet>;

    fn add(mut self, mut rhs: Wallet) -> Result<Wallet> {
        self.absorb(&mut rhs)?;
        Ok(self)
    }
}

impl Add<&mut Wallet> for Wallet {
    type Output = Result<Wallet>;

    fn add(mut self, rhs: &mut Wallet) -> Result<Wallet> {
        self.absorb(rhs)?;
        Ok(self)
    }
}

impl Sub<&mut Wallet> for Wallet {
    type Output = Result<Wallet>;

    fn sub(mut self, rhs: &mut Wallet) -> Result<Wallet> {
        self.pay_into(rhs)?;
        Ok(self)
    }
}

impl Sub<Wallet> for Wallet {
    type Output = Result<Wallet>;

    /// Both operands are transient: the subtracted units go back to the pool
    /// along with `rhs` itself when it is dropped.
    fn sub(mut self, rhs: Wallet) -> Result<Wallet> {
        self.ensure_same_pool(&rhs)?;
        let withdrawn = rhs.balance;
        self.balance = self.withdrawable(withdrawn)?;
        self.pool.credit(withdrawn);
        self.record();
        Ok(self)
    }
}

impl Mul<i32> for Wallet {
    type Output = Result<Wallet>;

    fn mul(mut self, factor: i32) -> Result<Wallet> {
        self.scale(factor)?;
        Ok(self)
    }
}

impl Mul<Wallet> for i32 {
    type Output = Result<Wallet>;

    fn mul(self, wallet: Wallet) -> Result<Wallet> {
        wallet * self
    }
}

impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        self.balance == other.balance
    }
}

impl Eq for Wallet {}

impl PartialOrd for Wallet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Wallet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.balance.cmp(&other.balance)
    }
}

impl Index<usize> for Wallet {
    type Output = Operation;

    /// # Panics
    ///
    /// Panics if `index` is out of range; use [`Wallet::operation`] to get an
    /// error instead.
    fn index(&self, index: usize) -> &Operation {
        &self.history.as_slice()[index]
    }
}

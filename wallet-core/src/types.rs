//! Core value types for the wallet
//!
//! All amounts are designed for:
//! - Exact arithmetic (integer minimal units, no floating point)
//! - Checked overflow on every operation
//! - Deterministic serialization (serde)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimal units in one major unit (one coin)
pub const UNITS_PER_COIN: u64 = 100_000_000;

/// Decimal digits of precision below one coin
pub const DECIMAL_PLACES: u32 = 8;

/// Global supply cap: 21 million coins
pub const TOTAL_SUPPLY: Units = Units(21_000_000 * UNITS_PER_COIN);

/// Count of indivisible minimal units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Units(u64);

impl Units {
    /// No units
    pub const ZERO: Self = Self(0);

    /// Create from a raw minimal-unit count
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw minimal-unit count
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// True when no units are held
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Convert whole coins to minimal units
    pub fn from_coins(coins: u64) -> Option<Self> {
        coins.checked_mul(UNITS_PER_COIN).map(Self)
    }

    /// Split into whole coins and the minimal-unit remainder
    pub const fn split_coins(&self) -> (u64, u64) {
        (self.0 / UNITS_PER_COIN, self.0 % UNITS_PER_COIN)
    }

    /// Checked addition
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication by a scalar
    pub fn checked_mul(self, factor: u64) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
}

/// Whole-number coin counts a wallet may be constructed from.
///
/// Sealed: only `i32`, `u32`, `i64` and `u64` implement it, so floats, `bool`,
/// `char` and the narrow integer types are rejected at compile time.
pub trait Coins: sealed::Sealed + Copy {
    /// Coin count as a non-negative integer
    fn to_coins(self) -> crate::Result<u64>;
}

impl Coins for i32 {
    fn to_coins(self) -> crate::Result<u64> {
        i64::from(self).to_coins()
    }
}

impl Coins for u32 {
    fn to_coins(self) -> crate::Result<u64> {
        Ok(u64::from(self))
    }
}

impl Coins for i64 {
    fn to_coins(self) -> crate::Result<u64> {
        u64::try_from(self).map_err(|_| crate::Error::NegativeAmount(self))
    }
}

impl Coins for u64 {
    fn to_coins(self) -> crate::Result<u64> {
        Ok(self)
    }
}

//! Wallet Core
//!
//! Fixed-point currency wallets drawn from a capped, exactly conserved supply.
//!
//! # Architecture
//!
//! - **Supply pool**: explicit handle counting units not yet issued
//! - **Wallet**: move-only balance holder bound to one pool
//! - **Operation log**: append-only, time-ordered balance snapshots per wallet
//!
//! # Invariants
//!
//! - Conservation: pool + Σ(live balances) == total supply for all time
//! - No balance is ever negative or above the supply cap
//! - A wallet's last logged operation records its current balance
//! - Failed operations change nothing
//!
//! # Example
//!
//! ```
//! use wallet_core::{SupplyPool, Wallet};
//!
//! let pool = SupplyPool::default();
//! let mut a = Wallet::from_coins(&pool, 1)?;
//! let mut b = Wallet::parse(&pool, "0.5")?;
//!
//! a.absorb(&mut b)?;
//! assert_eq!(a.units().raw(), 150_000_000);
//! assert_eq!(a.to_string(), "Wallet[1,5 B]");
//! # Ok::<(), wallet_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod operation;
pub mod parse;
pub mod pool;
pub mod telemetry;
pub mod types;
pub mod wallet;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use operation::{History, Operation};
pub use pool::SupplyPool;
pub use types::{Coins, Units, TOTAL_SUPPLY, UNITS_PER_COIN};
pub use wallet::Wallet;

//! Error types for the wallet core

use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet errors
///
/// Every variant is raised before any balance or pool counter is touched.
#[derive(Error, Debug)]
pub enum Error {
    /// Debit would exceed the units left in the supply pool
    #[error("Supply exceeded: requested {requested} units, {available} available")]
    SupplyExceeded {
        /// Units requested from the pool
        requested: u64,
        /// Units the pool could still issue
        available: u64,
    },

    /// Construction or scaling from a negative whole number
    #[error("Negative amount: {0}")]
    NegativeAmount(i64),

    /// Source wallet holds fewer units than the operation needs
    #[error("Insufficient funds: need {needed} units, have {available}")]
    InsufficientFunds {
        /// Units the operation would take
        needed: u64,
        /// Units held by the source wallet
        available: u64,
    },

    /// Text does not match the amount grammar
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),

    /// History index past the end of the log
    #[error("Operation index {index} out of range (history holds {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// History length
        len: usize,
    },

    /// Wallets issued by different supply pools cannot exchange units
    #[error("Wallets belong to different supply pools")]
    PoolMismatch,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

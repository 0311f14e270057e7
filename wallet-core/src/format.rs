//! Human-readable rendering of wallets and operations

use chrono::Local;
use std::fmt;

use crate::operation::Operation;
use crate::types::Units;
use crate::wallet::Wallet;

/// Render units as coins with `,` as separator and trailing zeros trimmed
///
/// `150_000_000` renders as `1,5`, `5_000_000` as `0,05`, whole amounts
/// without a separator.
pub fn format_coins(units: Units) -> String {
    let (whole, remainder) = units.split_coins();
    if remainder == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:08}", remainder);
    format!("{},{}", whole, fraction.trim_end_matches('0'))
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet[{} B]", format_coins(self.units()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.timestamp().with_timezone(&Local).format("%F");
        write!(
            f,
            "Wallet balance is {} B after operation made at day {}",
            self.units(),
            day
        )
    }
}

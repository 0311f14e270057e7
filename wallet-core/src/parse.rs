//! Text to minimal-unit conversion
//!
//! Pure functions: nothing here touches a pool or a wallet.
//!
//! # Grammar
//!
//! - Decimal: optional surrounding whitespace, 1–8 integer digits without
//!   leading zeros (a lone `0` is allowed), optionally `.` or `,` followed by
//!   0–8 fractional digits. `"1"`, `"0.5"`, `" 12,25 "`, `"3."` are accepted.
//! - Binary: one or more `0`/`1` digits counting minimal units directly.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{Units, DECIMAL_PLACES, UNITS_PER_COIN};
use crate::{Error, Result};

static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();
static BINARY_RE: OnceLock<Regex> = OnceLock::new();

fn decimal_re() -> &'static Regex {
    DECIMAL_RE.get_or_init(|| {
        Regex::new(r"^\s*(0|[1-9][0-9]{0,7})(?:[.,]([0-9]{0,8}))?\s*$").expect("valid regex")
    })
}

fn binary_re() -> &'static Regex {
    BINARY_RE.get_or_init(|| Regex::new(r"^[01]+$").expect("valid regex"))
}

/// Parse a decimal coin amount into minimal units
pub fn parse_decimal(text: &str) -> Result<Units> {
    let caps = decimal_re()
        .captures(text)
        .ok_or_else(|| Error::MalformedAmount(text.to_string()))?;

    // Both groups are bounded to 8 ASCII digits, so neither parse nor the
    // arithmetic below can overflow a u64.
    let whole: u64 = caps[1]
        .parse()
        .map_err(|_| Error::MalformedAmount(text.to_string()))?;
    let mut units = whole * UNITS_PER_COIN;

    if let Some(fraction) = caps.get(2).map(|m| m.as_str()).filter(|f| !f.is_empty()) {
        let digits: u64 = fraction
            .parse()
            .map_err(|_| Error::MalformedAmount(text.to_string()))?;
        units += digits * 10u64.pow(DECIMAL_PLACES - fraction.len() as u32);
    }

    Ok(Units::new(units))
}

/// Parse a binary string of minimal units
pub fn parse_binary(text: &str) -> Result<Units> {
    if !binary_re().is_match(text) {
        return Err(Error::MalformedAmount(text.to_string()));
    }
    u64::from_str_radix(text, 2)
        .map(Units::new)
        .map_err(|_| Error::MalformedAmount(text.to_string()))
}

//! Currency amounts as integer cents.
//!
//! Receipts carry amounts as strings such as `"35.35"`. They are parsed
//! straight into a count of cents so that every later check (round dollar,
//! multiple of a quarter, the description bonus) is exact integer arithmetic.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A non-negative currency amount in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(pub u64);

impl Cents {
    pub const fn new(cents: u64) -> Self {
        Cents(cents)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The cents part of the amount (`0..100`).
    pub const fn fraction(self) -> u64 {
        self.0 % 100
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("expected a non-negative decimal with at most two fractional digits")]
    Format,
    #[error("amount is too large")]
    Overflow,
}

impl FromStr for Cents {
    type Err = AmountError;

    /// Accepts `12`, `12.5` and `12.50`. Signs, exponents, a bare `.5`, a
    /// trailing `12.` and a third fractional digit are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = regex!(r"^([0-9]+)(?:\.([0-9]{1,2}))?$").captures(s).ok_or(AmountError::Format)?;

        let whole: u64 = caps[1].parse().map_err(|_| AmountError::Overflow)?;
        let fraction = match caps.get(2).map(|m| m.as_str()) {
            Some(f) if f.len() == 1 => f.parse::<u64>().map_err(|_| AmountError::Format)? * 10,
            Some(f) => f.parse::<u64>().map_err(|_| AmountError::Format)?,
            None => 0,
        };

        whole.checked_mul(100).and_then(|c| c.checked_add(fraction)).map(Cents).ok_or(AmountError::Overflow)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.fraction())
    }
}

//! Money type for representing currency amounts
//!
//! Amounts are whole cents in an i64. Parsing is exact: input with more than
//! two decimal places is rejected instead of rounded, and anything larger
//! than [`Money::MAX`] is refused so that monthly totals cannot overflow in
//! practice. Arithmetic is checked regardless.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A monetary amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted for a single entry or budget (10 trillion units)
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the magnitude is within [`Money::MAX`]
    pub const fn is_within_limit(&self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0 as u64
    }

    /// `self + other`, or `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `self - other`, or `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10", "10.5" and ".5".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let (units_str, cents_str) = rest.split_once('.').unwrap_or((rest, ""));

        if units_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(cents_str) {
            return Err(invalid());
        }
        if cents_str.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let units: i64 = match units_str {
            "" => 0,
            digits => digits
                .parse()
                .map_err(|_| MoneyParseError::TooLarge(input.to_string()))?,
        };
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str.parse().map_err(|_| invalid())?,
        };

        let amount = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(|total| Self(if negative { -total } else { total }))
            .filter(Money::is_within_limit)
            .ok_or_else(|| MoneyParseError::TooLarge(input.to_string()))?;

        Ok(amount)
    }

    /// Format with two decimals and a currency symbol, e.g. "-€12.05"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, magnitude / 100, magnitude % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Amount has more than two decimal places: {0}")]
    TooPrecise(String),
    #[error("Amount is too large: {0}")]
    TooLarge(String),
}

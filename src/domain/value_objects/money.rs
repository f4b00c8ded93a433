//! Money value object.
//!
//! Provides a strongly-typed representation of account balances and
//! transfer amounts. All amounts are in a single currency (dollars) and are
//! displayed with exactly two decimal places.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of decimal places a monetary amount may carry.
pub const MONEY_SCALE: u32 = 2;

/// Errors that can occur when constructing `Money` from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount string could not be parsed as a decimal number.
    InvalidAmount(String),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(value) => {
                write!(formatter, "'{value}' is not a number")
            }
        }
    }
}

impl std::error::Error for MoneyError {}

/// A monetary amount.
///
/// `Money` wraps a `Decimal` so that arithmetic on balances is exact. On the
/// wire it is a plain JSON number (`1000.0`), which is what API clients
/// compare against.
///
/// # Examples
///
/// ```rust
/// use minibank::domain::value_objects::Money;
///
/// let balance = Money::from_cents(100_050);
/// assert_eq!(balance.to_string(), "$1000.50");
/// assert_eq!(balance.to_plain_string(), "1000.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Creates an amount from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, MONEY_SCALE))
    }

    /// Creates an amount from a whole number of dollars.
    #[must_use]
    pub fn from_dollars(dollars: i64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Wraps an existing decimal amount without rounding.
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `true` if the amount carries more than two significant
    /// decimal places (`10.005`). Trailing zeros do not count.
    #[must_use]
    pub fn has_sub_cent_precision(&self) -> bool {
        self.0.normalize().scale() > MONEY_SCALE
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtracts `other` from `self`, returning `None` on overflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Renders the amount without the currency sign, always with two
    /// decimals (`"990.00"`).
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "${:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| MoneyError::InvalidAmount(trimmed.to_string()))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

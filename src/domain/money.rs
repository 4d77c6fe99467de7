//! Money type
//!
//! Domain primitive for prices and wishlist values.
//! Money is validated at construction time, so a negative price
//! cannot exist anywhere in the system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Maximum decimal places (8)
const MAX_SCALE: u32 = 8;

/// Money represents a non-negative monetary value.
///
/// # Invariants
/// - Value is never negative (>= 0)
/// - Maximum 8 decimal places
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use wishlist_admin::domain::Money;
///
/// let price = Money::new(Decimal::new(9999, 2)).unwrap();
/// assert_eq!(price.times(2).value(), Decimal::new(19998, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

/// Errors that can occur when creating Money
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Money cannot be negative (got {0})")]
    Negative(Decimal),

    #[error("Money has too many decimal places (max {MAX_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("Money arithmetic overflowed")]
    Overflow,

    #[error("Invalid money format: {0}")]
    ParseError(String),
}

impl Money {
    /// Create new Money with validation.
    ///
    /// # Errors
    /// - `MoneyError::Negative` if value < 0
    /// - `MoneyError::TooManyDecimals` if more than 8 decimal places
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value < Decimal::ZERO {
            return Err(MoneyError::Negative(value));
        }

        if value.scale() > MAX_SCALE {
            return Err(MoneyError::TooManyDecimals(value.scale()));
        }

        Ok(Self(value))
    }

    /// Zero money
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Value of `quantity` units at this price, saturating at `Decimal::MAX`.
    ///
    /// Wishlists admitted to the store are checked with [`Money::checked_times`],
    /// so saturation never happens on stored data.
    pub fn times(&self, quantity: u32) -> Money {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Value of `quantity` units at this price.
    ///
    /// # Errors
    /// - `MoneyError::Overflow` if the product does not fit a `Decimal`
    pub fn checked_times(&self, quantity: u32) -> Result<Money, MoneyError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// # Errors
    /// - `MoneyError::Overflow` if the sum does not fit a `Decimal`
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s).map_err(|e| MoneyError::ParseError(e.to_string()))?;
        Money::new(decimal)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

// Sum of two non-negative values stays non-negative, so no re-validation.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

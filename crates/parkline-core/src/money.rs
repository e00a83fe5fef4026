//! # Money Module
//!
//! Provides the `Money` type for rates and fares.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rates are quoted as 3000.00 per hour. Fares are rate × whole hours.   │
//! │                                                                         │
//! │  Stored as integer minor units:                                        │
//! │    3000.00 → 300000 cents                                              │
//! │    300000 × 3 hours = 900000 cents → $9000.00                          │
//! │                                                                         │
//! │  Sums over a day of fares never drift.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parkline_core::money::Money;
//!
//! let hourly = Money::from_major(2000);
//! let fare = hourly * 3;
//! assert_eq!(fare, Money::from_major(6000));
//! assert_eq!(fare.to_string(), "$6000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use parkline_core::money::Money;
    ///
    /// let fare = Money::from_cents(300_050);
    /// assert_eq!(fare.cents(), 300_050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use parkline_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(3000).cents(), 300_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount as a float in major units, for display and
    /// percentage math only.
    ///
    /// ```rust
    /// use parkline_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(3000).as_major_f64(), 3000.0);
    /// ```
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies an hourly amount by a number of whole hours.
    ///
    /// ## Example
    /// ```rust
    /// use parkline_core::money::Money;
    ///
    /// let hourly = Money::from_major(3000);
    /// assert_eq!(hourly.multiply_hours(2), Money::from_major(6000));
    /// ```
    #[inline]
    pub const fn multiply_hours(&self, hours: i64) -> Self {
        Money(self.0 * hours)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$1234.56`. The console can re-format with its
/// configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, hours: i64) -> Self {
        Money(self.0 * hours)
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(3000);
        assert_eq!(money.cents(), 300_000);
        assert_eq!(money.major(), 3000);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major(3000)), "$3000.00");
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(3000);
        let b = Money::from_major(2000);

        assert_eq!(a + b, Money::from_major(5000));
        assert_eq!(b * 3, Money::from_major(6000));

        let mut total = Money::zero();
        total += a;
        assert_eq!(total, a);
    }

    #[test]
    fn test_sum() {
        let fares = [Money::from_major(3000), Money::from_major(2000), Money::from_major(6000)];
        let total: Money = fares.iter().sum();
        assert_eq!(total, Money::from_major(11000));

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_as_major_f64() {
        assert_eq!(Money::from_major(6000).as_major_f64(), 6000.0);
        assert_eq!(Money::from_cents(1050).as_major_f64(), 10.5);
    }
}

//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    Every coin, price and balance is a whole number of pence.            │
//! │    £1.50 is stored as 150 and shown as "150p".                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::money::Money;
//!
//! let price = Money::from_pence(150);
//! let balance = Money::from_pence(200);
//!
//! assert_eq!((balance - price).pence(), 50);
//! assert_eq!(price.to_string(), "150p");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: a shortfall is computed as `price - balance` and may
///   be inspected before it is known to be positive
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as the bare pence integer
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Coin inserted ──► Session.balance ──► Purchase (balance - price)       │
/// │                                               │                         │
/// │  Item.price ──────────────────────────────────┘                         │
/// │                                                                         │
/// │  Session.balance ──► make_change() ──► ChangeBreakdown                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let price = Money::from_pence(120);
    /// assert_eq!(price.pence(), 120);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition; `None` when the sum would overflow.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let max = Money::from_pence(i64::MAX);
    /// assert!(max.checked_add(Money::from_pence(5)).is_none());
    /// assert_eq!(
    ///     Money::from_pence(50).checked_add(Money::from_pence(20)),
    ///     Some(Money::from_pence(70))
    /// );
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// How many whole `unit`s fit into this amount, and what is left over.
    ///
    /// Used by the change calculator for each denomination step.
    #[inline]
    pub const fn div_rem(self, unit: Money) -> (i64, Money) {
        (self.0 / unit.0, Money(self.0 % unit.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays the amount the way the machine's panel does: `150p`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.0)
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a coin count.
impl Mul<u64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u64) -> Self {
        Money(self.0 * count as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(150);
        assert_eq!(money.pence(), 150);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(150)), "150p");
        assert_eq!(format!("{}", Money::from_pence(0)), "0p");
        assert_eq!(format!("{}", Money::from_pence(5)), "5p");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(200);
        let b = Money::from_pence(150);

        assert_eq!((a + b).pence(), 350);
        assert_eq!((a - b).pence(), 50);
        assert_eq!((Money::from_pence(20) * 3).pence(), 60);

        let mut c = Money::zero();
        c += a;
        c -= b;
        assert_eq!(c.pence(), 50);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::default();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_pence(5).is_positive());
        assert!(Money::from_pence(-50).is_negative());
    }

    #[test]
    fn test_div_rem() {
        let (count, rest) = Money::from_pence(95).div_rem(Money::from_pence(20));
        assert_eq!(count, 4);
        assert_eq!(rest.pence(), 15);
    }

    #[test]
    fn test_serializes_as_bare_pence() {
        let json = serde_json::to_string(&Money::from_pence(150)).unwrap();
        assert_eq!(json, "150");

        let back: Money = serde_json::from_str("75").unwrap();
        assert_eq!(back, Money::from_pence(75));
    }
}

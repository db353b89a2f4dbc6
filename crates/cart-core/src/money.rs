//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  A catalog price of $0.10 × 3 must total exactly $0.30.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 cents × 3 = 30 cents                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Money;
//! use cart_core::Quantity;
//!
//! let price = Money::from_cents(2000); // $20.00
//! let line = price.checked_mul_quantity(Quantity::new(10).unwrap()).unwrap();
//! assert_eq!(line.cents(), 20_000);
//! assert_eq!(line.to_string(), "$200.00");
//! ```

use std::fmt;

use crate::types::Quantity;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: same width the catalog and totals use
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: a cart prices everything in one implicit currency
///
/// ```text
/// CatalogEntry.price ──► × Quantity ──► line total ──► Σ ──► Cart total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Line total for `qty` units at this unit price, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use cart_core::Quantity;
    ///
    /// let unit = Money::from_cents(10); // $0.10
    /// let line = unit.checked_mul_quantity(Quantity::new(3).unwrap()).unwrap();
    /// assert_eq!(line.cents(), 30);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: Quantity) -> Option<Money> {
        self.0.checked_mul(qty.get()).map(Money)
    }

    /// Sum of two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC` (debugging and demo output; no localization).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(20_000)), "$200.00");
        assert_eq!(format!("{}", Money::from_cents(10)), "$0.10");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_checked_add_accumulates() {
        let total = Money::from_cents(1000)
            .checked_add(Money::from_cents(500))
            .and_then(|sum| sum.checked_add(Money::from_cents(1)))
            .unwrap();
        assert_eq!(total.cents(), 1501);
    }

    #[test]
    fn test_checked_mul_quantity() {
        let unit = Money::from_cents(299);
        let line = unit.checked_mul_quantity(Quantity::new(3).unwrap()).unwrap();
        assert_eq!(line.cents(), 897);

        let huge = Money::from_cents(i64::MAX / 2);
        assert!(huge.checked_mul_quantity(Quantity::new(3).unwrap()).is_none());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_cents(i64::MAX);
        assert!(max.checked_add(Money::from_cents(1)).is_none());
        assert_eq!(
            Money::zero().checked_add(Money::from_cents(5)),
            Some(Money::from_cents(5))
        );
    }

    /// Float drift is impossible with cents: 0.1 × 3 is exactly 0.30.
    #[test]
    fn test_ten_cents_times_three_is_exact() {
        let unit = Money::from_cents(10);
        let line = unit.checked_mul_quantity(Quantity::new(3).unwrap()).unwrap();
        assert_eq!(line, Money::from_cents(30));
    }
}

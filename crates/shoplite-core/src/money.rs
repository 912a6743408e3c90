//! # Money Module
//!
//! Integer-cent monetary values and storefront price formatting.
//!
//! ## Why Integer Money?
//! ```text
//! In floating point: 0.1 + 0.2 = 0.30000000000000004
//!
//! Our solution: store paise (hundredths) as i64.
//! 2499900 paise = ₹24,999.00 — exact, always.
//! ```
//!
//! ## Display Format
//! Prices render in Indian-locale currency format: rupee symbol,
//! 3-then-2 digit grouping, and paise only when non-zero.
//!
//! ```text
//! 2499900  →  ₹24,999
//! 1234567890 → ₹1,23,45,678.90
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic intermediate values may go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Display = storefront format**: the one locale the shop renders in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit (rupee) portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Groups an unsigned digit string in the Indian style: the last three
/// digits stand alone, every earlier group has two digits.
///
/// `"1234567"` → `"12,34,567"`
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();

    // Walk the head right-to-left in chunks of two.
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);

    groups.join(",")
}

/// Display renders the fixed storefront currency format.
///
/// Whole-rupee amounts drop the paise (`₹24,999`); fractional amounts
/// always show two places (`₹24,999.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let grouped = group_indian(&self.units().abs().to_string());

        if self.minor() == 0 {
            write!(f, "{}₹{}", sign, grouped)
        } else {
            write!(f, "{}₹{}.{:02}", sign, grouped, self.minor())
        }
    }
}

/// Addition of two Money values.
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

/// Subtraction of two Money values.
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
        assert_eq!(money.units(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1234"), "1,234");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn test_display_whole_amounts_drop_paise() {
        assert_eq!(format!("{}", Money::from_cents(2_499_900)), "₹24,999");
        assert_eq!(format!("{}", Money::from_cents(500)), "₹5");
        assert_eq!(format!("{}", Money::from_cents(0)), "₹0");
    }

    #[test]
    fn test_display_fractional_amounts_show_two_places() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_cents(2_499_950)), "₹24,999.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-₹5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
        c -= b;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_ordering_matches_cents() {
        assert!(Money::from_cents(500) < Money::from_cents(1000));
        assert_eq!(Money::zero(), Money::from_cents(0));
    }
}

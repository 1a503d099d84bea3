//! # Money Module
//!
//! Provides the `Money` type for handling component prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices of a device configuration:                        │
//! │    10.28 + 25.94 + 18.77 + 42.31 + 45.00 = 142.29999999999998  ❌       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1028 + 2594 + 1877 + 4231 + 4500 = 14230 cents  ✅                   │
//! │                                                                         │
//! │  Conversion to a decimal number happens once, at the HTTP boundary.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use configurator_core::money::Money;
//!
//! let screen = Money::from_major_minor(10, 28); // $10.28
//! let body = Money::from_cents(4500);           // $45.00
//!
//! let total = screen + body;
//! assert_eq!(total.cents(), 5528);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Component.price_cents ──► running total in OrderValidator ──► OrderResult.total
///                                                                    │
///                                       HTTP layer: total_price ◄────┘ (decimal)
/// ```
///
/// Money never crosses the wire directly; the HTTP layer converts totals
/// with [`Money::to_major_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use configurator_core::money::Money;
    ///
    /// let price = Money::from_cents(1028); // Represents $10.28
    /// assert_eq!(price.cents(), 1028);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use configurator_core::money::Money;
    ///
    /// let price = Money::from_major_minor(42, 31); // $42.31
    /// assert_eq!(price.cents(), 4231);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Returns the value in major units as a decimal number.
    ///
    /// For wire formats only. Never feed the result back into arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use configurator_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(14230).to_major_units(), 142.3);
    /// ```
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
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

// =============================================================================
// Unit Tests
// =============================================================================

//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Minor Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A cart holding ten items priced 0.10 each, summed as f64:              │
//! │    0.1 + 0.1 + ... + 0.1 = 0.9999999999999999  ❌ WRONG!                │
//! │                                                                         │
//! │  The same cart in integer minor units:                                  │
//! │    10 + 10 + ... + 10 = 100                    ✅ EXACT                 │
//! │                                                                         │
//! │  Every price and every total in this crate is an i64 count of           │
//! │  two-decimal minor units. Only display code ever writes "1.00".         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trolley_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_minor_units(150); // 1.50
//!
//! // Or from major and minor parts
//! let same = Money::from_major_minor(1, 50);
//! assert_eq!(price, same);
//!
//! // Arithmetic operations
//! let line_total = price * 3;                       // 4.50
//! let total = line_total + Money::from_minor_units(600); // 10.50
//! assert_eq!(total.minor_units(), 1050);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value stored as a count of two-decimal minor units.
///
/// ## Design Decisions
/// - **i64 (signed)**: A signed total never silently wraps where an unsigned
///   one would; negative values also let callers represent adjustments even
///   though the cart itself only ever stores positive prices.
/// - **Single-field tuple struct**: Zero-cost abstraction over i64.
/// - **No currency**: The type carries an amount, not a currency label.
///   Attaching a symbol is display-layer business and none of this crate's.
///
/// ## Where Money Flows
/// ```text
/// LineItem.unit_price ──× quantity──► LineItem.line_total()
///                                           │
///                                           Σ over items
///                                           ▼
///                                     CartSnapshot.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest two-decimal unit).
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// let price = Money::from_minor_units(150); // 1.50
    /// assert_eq!(price.minor_units(), 150);
    /// ```
    #[inline]
    pub const fn from_minor_units(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from major and minor parts.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// let price = Money::from_major_minor(2, 0); // 2.00
    /// assert_eq!(price.minor_units(), 200);
    ///
    /// let adjustment = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(adjustment.minor_units(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major part carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50, not -4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Sign lives on the major part; minor extends away from zero
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value as a count of minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the major part (whole units).
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor_units(1050).major_part(), 10);
    /// assert_eq!(Money::from_minor_units(-550).major_part(), -5);
    /// ```
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor part (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor_units(1050).minor_part(), 50);
    /// assert_eq!(Money::from_minor_units(-550).minor_part(), 50); // absolute
    /// ```
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
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
    ///
    /// This is the check behind "unit price must be positive": zero is not
    /// a sellable price here, so `is_positive` rather than `!is_negative`.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds another value, returning `None` if the sum cannot be
    /// represented.
    ///
    /// The plain `+` operator is for arithmetic already known to be in
    /// range; callers folding unbounded input reach for this first.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// let a = Money::from_minor_units(450);
    /// assert_eq!(a.checked_add(Money::from_minor_units(600)),
    ///            Some(Money::from_minor_units(1050)));
    /// assert_eq!(Money::from_minor_units(i64::MAX).checked_add(a), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, quantity: i64) -> Option<Self> {
        match self.0.checked_mul(quantity) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders `major.minor` with two digits and no currency symbol.
///
/// ## Note
/// This is for logs and debugging. Currency labels and locale formatting
/// belong to whoever presents the value, not to this crate.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_part().abs(),
            self.minor_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over an iterator, so a cart total is one `.sum()` away.
///
/// ## Example
/// ```rust
/// use trolley_core::money::Money;
///
/// let line_totals = [Money::from_minor_units(450), Money::from_minor_units(600)];
/// let total: Money = line_totals.into_iter().sum();
/// assert_eq!(total, Money::from_minor_units(1050));
/// ```
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

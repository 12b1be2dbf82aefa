//! # Validation Module
//!
//! Input validation for cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Where Validation Sits                               │
//! │                                                                         │
//! │  Caller ──► Cart::add(name, quantity, unit_price)                       │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │            THIS MODULE: one rule per function. Field checks run         │
//! │            before the collection is looked at; overflow guards          │
//! │            run on the computed merge and totals before anything         │
//! │            is written back                                              │
//! │                  │                                                      │
//! │         ┌────────┴────────┐                                             │
//! │         ▼                 ▼                                             │
//! │     any check fails    all pass                                         │
//! │     → Err, cart        → insert or merge                                │
//! │       untouched                                                         │
//! │                                                                         │
//! │  Because every rule runs before the mutation, a failed add can          │
//! │  never leave a half-applied line item behind.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trolley_core::validation::{
//!     checked_merged_quantity, validate_item_name, validate_quantity,
//! };
//!
//! assert!(validate_item_name("Apple").is_ok());
//! assert!(validate_item_name("   ").is_err());
//!
//! assert!(validate_quantity(3).is_ok());
//! assert!(validate_quantity(0).is_err());
//!
//! assert_eq!(checked_merged_quantity(2, 1).unwrap(), 3);
//! assert!(checked_merged_quantity(i64::MAX, 1).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Everything else is a legal name, and names are stored exactly as
///   given: matching is case-sensitive and byte-exact, so "apple" and
///   "Apple" are distinct lines
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be strictly positive (> 0)
///
/// The parameter is signed on purpose: callers hand us whatever they were
/// given, and a negative quantity must come back as a rejection, not as a
/// type error at some earlier conversion.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - Zero is not a sellable price: a free line would make the total
///   indistinguishable from a data-entry mistake
pub fn validate_unit_price(unit_price: Money) -> ValidationResult<()> {
    if !unit_price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Overflow Guards
// =============================================================================
// There is no business cap on quantities or totals; the only ceiling is
// what i64 can represent. These guards compute the post-mutation numbers
// and reject an add whose result would not fit, before anything changes.

/// Computes the quantity a merge would leave on an existing line,
/// rejecting i64 overflow.
pub fn checked_merged_quantity(existing: i64, added: i64) -> ValidationResult<i64> {
    existing
        .checked_add(added)
        .ok_or_else(|| ValidationError::Overflow {
            field: "quantity".to_string(),
        })
}

/// Computes a line total (unit price × quantity), rejecting overflow.
pub fn checked_line_total(unit_price: Money, quantity: i64) -> ValidationResult<Money> {
    unit_price
        .checked_mul(quantity)
        .ok_or_else(|| ValidationError::Overflow {
            field: "total".to_string(),
        })
}

/// Computes a cart total with one more line total folded in, rejecting
/// overflow.
pub fn checked_cart_total(current: Money, line_total: Money) -> ValidationResult<Money> {
    current
        .checked_add(line_total)
        .ok_or_else(|| ValidationError::Overflow {
            field: "total".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Apple").is_ok());
        assert!(validate_item_name("pomme de terre").is_ok());
        assert!(validate_item_name("éclair").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name("\t\n").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_minor_units(1)).is_ok());
        assert!(validate_unit_price(Money::from_minor_units(150)).is_ok());

        assert!(validate_unit_price(Money::zero()).is_err());
        assert!(validate_unit_price(Money::from_minor_units(-100)).is_err());
    }

    #[test]
    fn test_checked_merged_quantity() {
        assert_eq!(checked_merged_quantity(2, 3).unwrap(), 5);
        assert_eq!(checked_merged_quantity(i64::MAX - 1, 1).unwrap(), i64::MAX);

        let err = checked_merged_quantity(i64::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overflow { ref field } if field == "quantity"
        ));
    }

    #[test]
    fn test_checked_totals() {
        let line = checked_line_total(Money::from_minor_units(150), 3).unwrap();
        assert_eq!(line, Money::from_minor_units(450));
        assert!(checked_line_total(Money::from_minor_units(2), i64::MAX).is_err());

        let total = checked_cart_total(line, Money::from_minor_units(600)).unwrap();
        assert_eq!(total, Money::from_minor_units(1050));

        let err = checked_cart_total(
            Money::from_minor_units(i64::MAX),
            Money::from_minor_units(1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overflow { ref field } if field == "total"
        ));
    }

    #[test]
    fn test_rejections_name_the_field() {
        let err = validate_quantity(0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MustBePositive { ref field } if field == "quantity"
        ));

        let err = validate_unit_price(Money::zero()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MustBePositive { ref field } if field == "unit price"
        ));

        let err = validate_item_name(" ").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Required { ref field } if field == "name"
        ));
    }
}

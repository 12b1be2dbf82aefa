//! # Error Types
//!
//! The cart's two error kinds. Nothing in this crate panics on bad input;
//! every failure is a typed value the caller can report and move past.
//!
//! ## Error Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Error Kinds                                 │
//! │                                                                         │
//! │  ValidationError  ──  rejected input on `add`                           │
//! │  ├── Required        (blank item name)                                  │
//! │  ├── MustBePositive  (quantity or unit price ≤ 0)                       │
//! │  └── Overflow        (merged quantity or total past the i64 range)      │
//! │                                                                         │
//! │  NotFoundError    ──  `remove` of a name the cart does not hold         │
//! │                                                                         │
//! │  Both recover locally: the failed operation is a no-op and the cart     │
//! │  is exactly as it was. There is no third kind and no fatal case.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impls)
//! 2. Carry context in the error (which field, which name)
//! 3. Errors are typed values, never strings
//! 4. Each error maps to a message a caller can show as-is

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by `add`.
///
/// A rejected `add` touches nothing: validation runs before the collection
/// is looked at, so there is no partial-mutation case to roll back.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field must be strictly positive.
    ///
    /// Zero is rejected alongside negatives: a zero-quantity line is a
    /// phantom entry and a zero-price line breaks the total's meaning.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A merged quantity or a total would exceed the representable range.
    ///
    /// There is no business cap on size; the rejection point is i64
    /// representability, checked before anything is written back.
    #[error("{field} would overflow")]
    Overflow { field: String },
}

// =============================================================================
// Not-Found Error
// =============================================================================

/// Raised by `remove` when no line item carries the given name.
///
/// Non-fatal by contract: the caller is informed, the cart is unchanged.
#[derive(Debug, Error)]
#[error("no item named '{name}' in the cart")]
pub struct NotFoundError {
    /// The name that matched nothing (case-sensitive, exact).
    pub name: String,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Overflow {
            field: "total".to_string(),
        };
        assert_eq!(err.to_string(), "total would overflow");
    }

    #[test]
    fn test_not_found_error_message() {
        let err = NotFoundError {
            name: "Pear".to_string(),
        };
        assert_eq!(err.to_string(), "no item named 'Pear' in the cart");
    }
}

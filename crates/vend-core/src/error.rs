//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                           │
//! │  ├── VendError        - Rejected session operations                     │
//! │  └── ValidationError  - Malformed tokens / catalog entries              │
//! │                                                                         │
//! │  vend-cli errors (app crate)                                            │
//! │  └── AppError         - Console I/O failures                            │
//! │                                                                         │
//! │  Flow: ValidationError → VendError → user-facing line on the panel      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is recoverable: the console reports it and carries on.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Vend Error
// =============================================================================

/// A session operation that the machine refused.
///
/// None of these mutate state: when an operation returns `Err`, the balance
/// and every stock count are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendError {
    /// No catalog item has this code.
    #[error("Unknown item code: {0}")]
    UnknownCode(String),

    /// The item exists but its stock is zero.
    #[error("{name} ({code}) is out of stock")]
    OutOfStock { code: String, name: String },

    /// The balance does not cover the price.
    ///
    /// ## User Workflow
    /// ```text
    /// Balance: 100p
    ///      │
    ///      ▼
    /// Select A1 (Coffee, 150p)
    ///      │
    ///      ▼
    /// InsufficientFunds { price: 150p, balance: 100p, shortfall: 50p }
    ///      │
    ///      ▼
    /// Panel shows: "Insufficient funds. Need 50p more."
    /// ```
    #[error("Insufficient funds for {code}: price {price}, balance {balance}, need {shortfall} more")]
    InsufficientFunds {
        code: String,
        price: Money,
        balance: Money,
        shortfall: Money,
    },

    /// The coin is not one of the accepted denominations.
    #[error("Unsupported coin: {0}")]
    UnsupportedCoin(Money),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while parsing console tokens and while checking the catalog an
/// inventory is built from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a coin token that is not all digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. two items sharing a code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with VendError.
pub type VendResult<T> = Result<T, VendError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VendError::InsufficientFunds {
            code: "A1".to_string(),
            price: Money::from_pence(150),
            balance: Money::from_pence(100),
            shortfall: Money::from_pence(50),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds for A1: price 150p, balance 100p, need 50p more"
        );

        let err = VendError::OutOfStock {
            code: "C1".to_string(),
            name: "Chocolate Bar".to_string(),
        };
        assert_eq!(err.to_string(), "Chocolate Bar (C1) is out of stock");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::Duplicate {
            field: "code".to_string(),
            value: "A1".to_string(),
        };
        assert_eq!(err.to_string(), "code 'A1' already exists");
    }

    #[test]
    fn test_validation_converts_to_vend_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let vend_err: VendError = validation_err.into();
        assert!(matches!(vend_err, VendError::Validation(_)));
    }
}

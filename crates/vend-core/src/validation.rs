//! # Validation Module
//!
//! Token parsing for the console protocol and catalog checks.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Token shape (THIS MODULE)                                     │
//! │  ├── "done" / "back" sentinels                                          │
//! │  └── digits-only coin values                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session rules (session.rs)                                    │
//! │  ├── coin in the accepted table                                         │
//! │  ├── code resolves, stock > 0, balance >= price                         │
//! │  └── VendError on rejection                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::validation::{parse_coin_token, CoinToken};
//! use vend_core::Money;
//!
//! assert_eq!(parse_coin_token(" 50 ").unwrap(), CoinToken::Coin(Money::from_pence(50)));
//! assert_eq!(parse_coin_token("DONE").unwrap(), CoinToken::Done);
//! assert!(parse_coin_token("fifty").is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Ends coin entry.
pub const DONE_SENTINEL: &str = "done";

/// Cancels item selection.
pub const BACK_SENTINEL: &str = "back";

// =============================================================================
// Console Tokens
// =============================================================================

/// One line typed at the coin prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinToken {
    /// The `done` sentinel.
    Done,
    /// A well-formed amount. Whether it is an accepted coin is decided later.
    Coin(Money),
}

/// One line typed at the item-code prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeToken {
    /// The `back` sentinel.
    Back,
    /// A trimmed code, not yet resolved against the inventory.
    Code(String),
}

/// Parses a coin token.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - `done` in any case ends entry
/// - Otherwise every character must be an ASCII digit (no sign, no unit)
///
/// ## Errors
/// - `InvalidFormat` for empty or non-digit tokens
/// - `OutOfRange` for digit strings above `i32::MAX` pence
pub fn parse_coin_token(token: &str) -> ValidationResult<CoinToken> {
    let token = token.trim();

    if token.eq_ignore_ascii_case(DONE_SENTINEL) {
        return Ok(CoinToken::Done);
    }

    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "coin".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    let pence: i32 = token.parse().map_err(|_| ValidationError::OutOfRange {
        field: "coin".to_string(),
        min: 0,
        max: i64::from(i32::MAX),
    })?;

    Ok(CoinToken::Coin(Money::from_pence(i64::from(pence))))
}

/// Parses an item-code token.
///
/// ## Example
/// ```rust
/// use vend_core::validation::{parse_code_token, CodeToken};
///
/// assert_eq!(parse_code_token("Back"), CodeToken::Back);
/// assert_eq!(parse_code_token(" a1 "), CodeToken::Code("a1".to_string()));
/// ```
pub fn parse_code_token(token: &str) -> CodeToken {
    let token = token.trim();

    if token.eq_ignore_ascii_case(BACK_SENTINEL) {
        CodeToken::Back
    } else {
        CodeToken::Code(token.to_string())
    }
}

/// Yes/no answer: only a leading `y` or `Y` counts as yes.
///
/// ## Example
/// ```rust
/// use vend_core::validation::is_affirmative;
///
/// assert!(is_affirmative("yes please"));
/// assert!(is_affirmative(" Y"));
/// assert!(!is_affirmative("no"));
/// assert!(!is_affirmative(""));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().chars().next(), Some('y' | 'Y'))
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a slot code.
///
/// ## Rules
/// - Must not be empty
/// - Only ASCII letters and digits
/// - Must not collide with a sentinel
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    if code.eq_ignore_ascii_case(BACK_SENTINEL) {
        return Err(ValidationError::NotAllowed {
            field: "code".to_string(),
            allowed: vec!["any alphanumeric code except 'back'".to_string()],
        });
    }

    Ok(())
}

/// Validates a single catalog entry.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_code(&item.code)?;

    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if item.price_pence <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole catalog: every entry, plus case-insensitive code uniqueness.
pub fn validate_catalog(items: &[Item]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for item in items {
        validate_item(item)?;

        if !seen.insert(item.code.trim().to_ascii_uppercase()) {
            return Err(ValidationError::Duplicate {
                field: "code".to_string(),
                value: item.code.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

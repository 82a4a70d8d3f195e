//! # App Error Type
//!
//! Failures that stop the console loop.
//!
//! Everything the customer can do wrong is a `VendError` and is reported on
//! the panel; only these two escape `run`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin / stdout broken ───► AppError::Io       ─┐                       │
//! │                                                 ├──► main → anyhow      │
//! │  built-in catalog invalid ► AppError::Catalog  ─┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vend_core::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the console streams failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog the machine was loaded with is invalid.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] ValidationError),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::from(ValidationError::Required {
            field: "code".to_string(),
        });
        assert_eq!(err.to_string(), "invalid catalog: code is required");

        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.to_string(), "console I/O failed: pipe closed");
    }
}

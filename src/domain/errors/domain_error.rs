//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level errors with numeric error codes.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidPrice("price must be positive".to_string());
//! assert_eq!(error.code(), 1001);
//! ```

use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// Provides typed errors for domain operations with consistent
/// error codes for logging and rendering.
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid price value.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Invalid quantity value.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Invalid product name.
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    /// Invalid unit string.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    /// Invalid currency string.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Invalid user identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Invalid participant role.
    #[error("invalid role: {0}")]
    InvalidRole(String),
}

impl DomainError {
    /// Returns the numeric error code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use trade_matcher::domain::errors::DomainError;
    ///
    /// let error = DomainError::InvalidQuantity("quantity must be positive".to_string());
    /// assert!(error.code() >= 1000 && error.code() < 2000);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidPrice(_) => 1001,
            Self::InvalidQuantity(_) => 1002,
            Self::InvalidProduct(_) => 1003,
            Self::InvalidUnit(_) => 1004,
            Self::InvalidCurrency(_) => 1005,
            Self::InvalidId(_) => 1006,
            Self::InvalidRole(_) => 1007,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

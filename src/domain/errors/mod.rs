//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! Error codes are organized by category:
//! - 1000-1999: Validation errors
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::errors::{DomainError, DomainResult};
//!
//! fn validate_product(name: &str) -> DomainResult<()> {
//!     if name.trim().is_empty() {
//!         return Err(DomainError::InvalidProduct("product name cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};

//! # Unit and Currency Value Objects
//!
//! Measurement unit and currency tokens.
//!
//! Both types normalize their input to lowercase at construction, so the
//! derived equality is exactly the case-insensitive comparison the matching
//! rules require. The engine treats a unit or currency mismatch as a binary
//! gate: no conversion is ever attempted.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::value_objects::unit::{Currency, Unit};
//!
//! let kg = Unit::new("Kg").unwrap();
//! assert_eq!(kg, Unit::new("kg").unwrap());
//! assert_ne!(kg, Unit::new("gram").unwrap());
//!
//! let rupees = Currency::new("Rupees").unwrap();
//! assert_eq!(rupees.as_str(), "rupees");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measurement unit (e.g., `kg`, `liter`, `dozen`).
///
/// Stored lowercase so that equality is case-insensitive.
///
/// # Invariants
///
/// - Non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit(String);

impl Unit {
    /// Creates a new unit, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUnit`] if the input is empty or
    /// whitespace-only.
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let normalized = value.into().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidUnit("unit cannot be empty".to_string()));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized unit string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Unit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.0
    }
}

/// A currency token (e.g., `rupees`, `usd`).
///
/// Stored lowercase so that equality is case-insensitive.
///
/// # Invariants
///
/// - Non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a new currency, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCurrency`] if the input is empty or
    /// whitespace-only.
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let normalized = value.into().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidCurrency(
                "currency cannot be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized currency string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

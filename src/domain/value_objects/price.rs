//! # Price Value Object
//!
//! Decimal price per unit.
//!
//! This module provides the [`Price`] type, a type-safe wrapper around
//! [`Decimal`] for representing a positive per-unit price.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::value_objects::price::Price;
//!
//! let price = Price::new(10.0).unwrap();
//! let cheaper = Price::new(9.0).unwrap();
//! assert!(cheaper < price);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A validated per-unit price.
///
/// Represents a strictly positive decimal price. A price of zero or below
/// is rejected at construction, so every `Price` in the system is usable
/// for band comparisons without further checks.
///
/// # Invariants
///
/// - Price is always > 0
///
/// # Examples
///
/// ```
/// use trade_matcher::domain::value_objects::price::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(10.50).unwrap();
/// assert_eq!(price.get(), Decimal::new(1050, 2));
///
/// assert!(Price::new(0.0).is_err());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a new price from an f64 value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is not a finite
    /// positive number.
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::try_from(value)
            .map_err(|_| DomainError::InvalidPrice("not a finite number".to_string()))?;
        Self::from_decimal(decimal)
    }

    /// Creates a new price from a Decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is zero or negative.
    #[must_use = "this returns a Result that should be handled"]
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() || value.is_zero() {
            return Err(DomainError::InvalidPrice(
                "price must be positive".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the inner Decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s)
            .map_err(|_| DomainError::InvalidPrice(format!("invalid decimal '{s}'")))?;
        Self::from_decimal(decimal)
    }
}

//! # Quantity Value Object
//!
//! Decimal trade quantity.
//!
//! This module provides the [`Quantity`] type, a type-safe wrapper around
//! [`Decimal`] for representing a positive trade quantity.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::value_objects::quantity::Quantity;
//! use rust_decimal::Decimal;
//!
//! let a = Quantity::new(100.0).unwrap();
//! let b = Quantity::new(90.0).unwrap();
//! assert_eq!(a.abs_diff(b), Decimal::new(10, 0));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A validated trade quantity.
///
/// Represents a strictly positive decimal quantity.
///
/// # Invariants
///
/// - Quantity is always > 0
///
/// # Examples
///
/// ```
/// use trade_matcher::domain::value_objects::quantity::Quantity;
///
/// let qty = Quantity::new(100.0).unwrap();
/// assert!(Quantity::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    /// Creates a new quantity from an f64 value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuantity`] if the value is not a finite
    /// positive number.
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::try_from(value)
            .map_err(|_| DomainError::InvalidQuantity("not a finite number".to_string()))?;
        Self::from_decimal(decimal)
    }

    /// Creates a new quantity from a Decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuantity`] if the value is zero or negative.
    #[must_use = "this returns a Result that should be handled"]
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() || value.is_zero() {
            return Err(DomainError::InvalidQuantity(
                "quantity must be positive".to_string(),
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

    /// Returns the absolute difference between two quantities.
    ///
    /// # Examples
    ///
    /// ```
    /// use trade_matcher::domain::value_objects::quantity::Quantity;
    /// use rust_decimal::Decimal;
    ///
    /// let a = Quantity::new(100.0).unwrap();
    /// let b = Quantity::new(120.0).unwrap();
    /// assert_eq!(a.abs_diff(b), Decimal::new(20, 0));
    /// assert_eq!(b.abs_diff(a), Decimal::new(20, 0));
    /// ```
    #[inline]
    #[must_use]
    pub fn abs_diff(self, other: Self) -> Decimal {
        (self.0 - other.0).abs()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s)
            .map_err(|_| DomainError::InvalidQuantity(format!("invalid decimal '{s}'")))?;
        Self::from_decimal(decimal)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn new_positive_succeeds() {
            let qty = Quantity::new(100.0).unwrap();
            assert_eq!(qty.get(), Decimal::new(100, 0));
        }

        #[test]
        fn new_zero_fails() {
            assert!(matches!(
                Quantity::new(0.0),
                Err(DomainError::InvalidQuantity(_))
            ));
        }

        #[test]
        fn new_negative_fails() {
            assert!(matches!(
                Quantity::new(-5.0),
                Err(DomainError::InvalidQuantity(_))
            ));
        }

        #[test]
        fn from_str_works() {
            let qty: Quantity = "2.5".parse().unwrap();
            assert_eq!(qty.get(), Decimal::new(25, 1));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn abs_diff_is_symmetric() {
            let a = Quantity::new(100.0).unwrap();
            let b = Quantity::new(90.0).unwrap();
            assert_eq!(a.abs_diff(b), b.abs_diff(a));
            assert_eq!(a.abs_diff(b), Decimal::new(10, 0));
        }

        #[test]
        fn abs_diff_of_equal_is_zero() {
            let a = Quantity::new(100.0).unwrap();
            assert!(a.abs_diff(a).is_zero());
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let qty = Quantity::new(100.5).unwrap();
            let json = serde_json::to_string(&qty).unwrap();
            let deserialized: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(qty, deserialized);
        }
    }
}

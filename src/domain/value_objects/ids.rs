//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! - [`ListingId`] - Integer listing identifier
//! - [`UserId`] - String-based participant identifier

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing identifier.
///
/// An integer identifier uniquely identifying a listing within the
/// listing source.
///
/// # Examples
///
/// ```
/// use trade_matcher::domain::value_objects::ids::ListingId;
///
/// let id = ListingId::new(1);
/// assert_eq!(id.get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(u64);

impl ListingId {
    /// Creates a new listing ID.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ListingId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Participant identifier.
///
/// A string-based identifier for the owner of a listing
/// (e.g., `seller_A`, `buyer_X`).
///
/// # Invariants
///
/// - Non-empty after trimming
///
/// # Examples
///
/// ```
/// use trade_matcher::domain::value_objects::ids::UserId;
///
/// let id = UserId::new("seller_A").unwrap();
/// assert_eq!(id.as_str(), "seller_A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a new user ID.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] if the input is empty or
    /// whitespace-only.
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidId(
                "user id cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the inner string value.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn listing_id_roundtrip() {
        let id = ListingId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn listing_ids_are_ordered() {
        assert!(ListingId::new(1) < ListingId::new(2));
    }

    #[test]
    fn user_id_preserves_case() {
        let id = UserId::new("seller_A").unwrap();
        assert_eq!(id.as_str(), "seller_A");
    }

    #[test]
    fn empty_user_id_fails() {
        assert!(matches!(UserId::new("  "), Err(DomainError::InvalidId(_))));
    }
}

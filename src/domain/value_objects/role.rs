//! # Role and Listing Side
//!
//! The two-sided marketplace enums.
//!
//! A participant declares a [`Role`] (buyer or seller); every listing
//! carries a [`ListingSide`] (selling or buying). A buyer is matched
//! against selling listings and a seller against buying listings - the
//! opposite-side rule, expressed by [`Role::counterparty_side`].
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::value_objects::role::{ListingSide, Role};
//!
//! assert_eq!(Role::Buyer.counterparty_side(), ListingSide::Selling);
//! assert_eq!(Role::Seller.counterparty_side(), ListingSide::Buying);
//!
//! let role: Role = "buyer".parse().unwrap();
//! assert_eq!(role, Role::Buyer);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unrecognized role or side token.
///
/// An unrecognized role is a caller contract violation, never silently
/// defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role '{0}', expected 'buyer' or 'seller'")]
pub struct ParseRoleError(pub String);

/// The declared role of a marketplace participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Participant wants to buy; matched against selling listings.
    Buyer,
    /// Participant wants to sell; matched against buying listings.
    Seller,
}

impl Role {
    /// Returns the listing side this role is matched against.
    ///
    /// # Examples
    ///
    /// ```
    /// use trade_matcher::domain::value_objects::role::{ListingSide, Role};
    ///
    /// assert_eq!(Role::Buyer.counterparty_side(), ListingSide::Selling);
    /// ```
    #[inline]
    #[must_use]
    pub const fn counterparty_side(self) -> ListingSide {
        match self {
            Self::Buyer => ListingSide::Selling,
            Self::Seller => ListingSide::Buying,
        }
    }

    /// Returns the opposite role.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buyer => Self::Seller,
            Self::Seller => Self::Buyer,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// The side of a listing held by the listing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSide {
    /// The listing owner is offering goods.
    Selling,
    /// The listing owner is looking to acquire goods.
    Buying,
}

impl ListingSide {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Selling => Self::Buying,
            Self::Buying => Self::Selling,
        }
    }
}

impl fmt::Display for ListingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Selling => "selling",
            Self::Buying => "buying",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ListingSide {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "selling" => Ok(Self::Selling),
            "buying" => Ok(Self::Buying),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn counterparty_side_is_opposite() {
        assert_eq!(Role::Buyer.counterparty_side(), ListingSide::Selling);
        assert_eq!(Role::Seller.counterparty_side(), ListingSide::Buying);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("BUYER".parse::<Role>().unwrap(), Role::Buyer);
        assert_eq!(" Seller ".parse::<Role>().unwrap(), Role::Seller);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = "broker".parse::<Role>().unwrap_err();
        assert_eq!(err, ParseRoleError("broker".to_string()));
    }

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Role::Buyer.opposite().opposite(), Role::Buyer);
        assert_eq!(ListingSide::Selling.opposite(), ListingSide::Buying);
    }

    #[test]
    fn display_matches_parse() {
        for role in [Role::Buyer, Role::Seller] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}

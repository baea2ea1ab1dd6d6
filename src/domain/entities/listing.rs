//! # Listing Entity
//!
//! An immutable counterparty listing.
//!
//! Listings are supplied in full by the listing source on every matching
//! call; the engine only reads them, never creates or mutates them.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::entities::Listing;
//! use trade_matcher::domain::value_objects::{
//!     Currency, ListingId, ListingSide, Price, Quantity, Unit, UserId,
//! };
//!
//! let listing = Listing::new(
//!     ListingId::new(1),
//!     UserId::new("seller_A").unwrap(),
//!     ListingSide::Selling,
//!     "apples",
//!     Quantity::new(100.0).unwrap(),
//!     Some(Unit::new("kg").unwrap()),
//!     Price::new(9.0).unwrap(),
//!     Some(Currency::new("rupees").unwrap()),
//! )
//! .unwrap();
//!
//! assert_eq!(listing.product_name(), "apples");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Currency, ListingId, ListingSide, Price, Quantity, Unit, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A counterparty listing.
///
/// Represents one side of an offer held by the listing source: what a
/// seller is offering or what a buyer is looking for.
///
/// # Invariants
///
/// - `product_name` is non-empty
/// - `quantity` and `price_per_unit` are positive (enforced by their types)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    id: ListingId,
    owner: UserId,
    side: ListingSide,
    product_name: String,
    quantity: Quantity,
    unit: Option<Unit>,
    price_per_unit: Price,
    currency: Option<Currency>,
}

impl Listing {
    /// Creates a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProduct`] if the product name is empty
    /// or whitespace-only.
    #[allow(clippy::too_many_arguments)]
    #[must_use = "this returns a Result that should be handled"]
    pub fn new(
        id: ListingId,
        owner: UserId,
        side: ListingSide,
        product_name: impl Into<String>,
        quantity: Quantity,
        unit: Option<Unit>,
        price_per_unit: Price,
        currency: Option<Currency>,
    ) -> DomainResult<Self> {
        let product_name = product_name.into();
        if product_name.trim().is_empty() {
            return Err(DomainError::InvalidProduct(
                "product name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            owner,
            side,
            product_name,
            quantity,
            unit,
            price_per_unit,
            currency,
        })
    }

    /// Returns the listing identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ListingId {
        self.id
    }

    /// Returns the identifier of the listing owner.
    #[inline]
    #[must_use]
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the listing side.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> ListingSide {
        self.side
    }

    /// Returns the product name as stored.
    ///
    /// Product comparison during matching is case-insensitive.
    #[inline]
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the offered quantity.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the measurement unit, if declared.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Returns the price per unit.
    #[inline]
    #[must_use]
    pub const fn price_per_unit(&self) -> Price {
        self.price_per_unit
    }

    /// Returns the currency, if declared.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Listing(#{} {} {} {} {} @ {} {})",
            self.id,
            self.owner,
            self.side,
            self.quantity,
            self.product_name,
            self.price_per_unit,
            self.currency
                .as_ref()
                .map_or("?", |currency| currency.as_str()),
        )
    }
}

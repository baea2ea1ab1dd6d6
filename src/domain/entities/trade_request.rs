//! # Trade Request
//!
//! The normalized intent to buy or sell.
//!
//! Every field is optional: the entity extractor fills in whatever it could
//! recognize, and each absent field simply disables the corresponding
//! scoring dimension. Absence is modeled as `Option`, never as a default
//! value - an absent quantity is not zero.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::domain::entities::TradeRequest;
//! use trade_matcher::domain::value_objects::{Currency, Price, Quantity, Unit};
//!
//! let request = TradeRequest::builder()
//!     .product("apples")
//!     .quantity(Quantity::new(100.0).unwrap())
//!     .unit(Unit::new("kg").unwrap())
//!     .price(Price::new(10.0).unwrap())
//!     .currency(Currency::new("rupees").unwrap())
//!     .build();
//!
//! assert!(request.has_product());
//! ```

use crate::domain::value_objects::{Currency, Price, Quantity, Unit};
use serde::{Deserialize, Serialize};

/// A structured trade request.
///
/// One side of a buy/sell intent. A request without a product can never
/// match anything; a request without quantity or price data merely skips
/// that scoring dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    product: Option<String>,
    quantity: Option<Quantity>,
    unit: Option<Unit>,
    price: Option<Price>,
    currency: Option<Currency>,
}

impl TradeRequest {
    /// Returns a builder for constructing a trade request.
    #[must_use]
    pub fn builder() -> TradeRequestBuilder {
        TradeRequestBuilder::default()
    }

    /// Returns the requested product, if present and non-empty.
    ///
    /// An empty or whitespace-only product is treated as absent.
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        self.product
            .as_deref()
            .map(str::trim)
            .filter(|product| !product.is_empty())
    }

    /// Returns true if the request names a product.
    ///
    /// A request without a product can never produce a match.
    #[inline]
    #[must_use]
    pub fn has_product(&self) -> bool {
        self.product().is_some()
    }

    /// Returns the requested quantity, if present.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> Option<Quantity> {
        self.quantity
    }

    /// Returns the requested unit, if present.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Returns the requested price per unit, if present.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        self.price
    }

    /// Returns the requested currency, if present.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }
}

/// Builder for [`TradeRequest`].
///
/// Each setter fills one optional field; unset fields stay absent.
#[derive(Debug, Clone, Default)]
pub struct TradeRequestBuilder {
    product: Option<String>,
    quantity: Option<Quantity>,
    unit: Option<Unit>,
    price: Option<Price>,
    currency: Option<Currency>,
}

impl TradeRequestBuilder {
    /// Sets the requested product.
    #[must_use]
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Sets the requested quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the requested unit.
    #[must_use]
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Sets the requested price per unit.
    #[must_use]
    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the requested currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Builds the trade request.
    #[must_use]
    pub fn build(self) -> TradeRequest {
        TradeRequest {
            product: self.product,
            quantity: self.quantity,
            unit: self.unit,
            price: self.price,
            currency: self.currency,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_empty() {
        let request = TradeRequest::default();
        assert!(!request.has_product());
        assert!(request.quantity().is_none());
        assert!(request.price().is_none());
    }

    #[test]
    fn whitespace_product_counts_as_absent() {
        let request = TradeRequest::builder().product("   ").build();
        assert!(!request.has_product());
        assert!(request.product().is_none());
    }

    #[test]
    fn product_is_trimmed() {
        let request = TradeRequest::builder().product(" apples ").build();
        assert_eq!(request.product(), Some("apples"));
    }

    #[test]
    fn builder_sets_all_fields() {
        let request = TradeRequest::builder()
            .product("apples")
            .quantity(Quantity::new(100.0).unwrap())
            .unit(Unit::new("kg").unwrap())
            .price(Price::new(10.0).unwrap())
            .currency(Currency::new("rupees").unwrap())
            .build();

        assert!(request.has_product());
        assert_eq!(request.quantity().unwrap(), Quantity::new(100.0).unwrap());
        assert_eq!(request.unit().unwrap().as_str(), "kg");
        assert_eq!(request.price().unwrap(), Price::new(10.0).unwrap());
        assert_eq!(request.currency().unwrap().as_str(), "rupees");
    }
}

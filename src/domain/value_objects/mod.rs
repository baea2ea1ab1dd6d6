//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ListingId`]: Integer listing identifier
//! - [`UserId`]: String-based participant identifier
//!
//! ## Numeric Types
//!
//! - [`Price`]: Positive decimal price per unit
//! - [`Quantity`]: Positive decimal quantity
//!
//! ## Trading Types
//!
//! - [`Unit`]: Measurement unit with case-insensitive equality
//! - [`Currency`]: Currency token with case-insensitive equality
//!
//! ## Domain Enums
//!
//! - [`Role`]: Buyer or Seller
//! - [`ListingSide`]: Selling or Buying

pub mod ids;
pub mod price;
pub mod quantity;
pub mod role;
pub mod unit;

pub use ids::{ListingId, UserId};
pub use price::Price;
pub use quantity::Quantity;
pub use role::{ListingSide, ParseRoleError, Role};
pub use unit::{Currency, Unit};

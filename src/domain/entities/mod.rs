//! # Domain Entities
//!
//! Core business records.
//!
//! - [`Listing`]: An immutable counterparty listing held by the listing source
//! - [`TradeRequest`]: The normalized intent to buy or sell

pub mod listing;
pub mod trade_request;

pub use listing::Listing;
pub use trade_request::{TradeRequest, TradeRequestBuilder};

//! # Domain Layer
//!
//! Core business types following Domain-Driven Design principles.
//!
//! This layer contains:
//! - **Entities**: The immutable [`Listing`](entities::Listing) record and
//!   the [`TradeRequest`](entities::TradeRequest) intent
//! - **Value Objects**: Validated types ([`Price`](value_objects::Price),
//!   [`Quantity`](value_objects::Quantity), identifiers, roles)
//! - **Errors**: Domain-specific error types

pub mod entities;
pub mod errors;
pub mod value_objects;

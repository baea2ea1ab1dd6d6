//! # Trade Matcher
//!
//! Matching engine for a two-sided marketplace: a participant declares a
//! `buyer` or `seller` role and a structured trade request (product, optional
//! quantity and unit, optional price and currency), and the engine ranks the
//! opposite side's listings, returning the top 3 counterparties.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Entities, value objects, and domain errors
//! - **Application Layer** (`application`): The matching engine, the
//!   conversation session state machine, and use cases
//! - **Infrastructure Layer** (`infrastructure`): Listing repository and
//!   entity-extraction adapters
//!
//! ## Example
//!
//! ```
//! use trade_matcher::application::services::MatchingEngine;
//! use trade_matcher::domain::entities::TradeRequest;
//! use trade_matcher::domain::value_objects::Role;
//!
//! let request = TradeRequest::builder()
//!     .product("apples")
//!     .build();
//!
//! let engine = MatchingEngine::new();
//! let ranked = engine.rank(&request, &[], Role::Buyer);
//! assert!(ranked.is_empty());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

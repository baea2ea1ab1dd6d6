//! # Infrastructure Layer
//!
//! External collaborators of the matching engine.
//!
//! ## Persistence
//!
//! The listing source: [`ListingRepository`](persistence::ListingRepository)
//! trait and an in-memory implementation seeded with demo listings.
//!
//! ## Extraction
//!
//! The entity-extraction capability boundary:
//! [`EntityExtractor`](extraction::EntityExtractor) trait and a rule-based
//! implementation driven by configurable keyword patterns.

pub mod extraction;
pub mod persistence;

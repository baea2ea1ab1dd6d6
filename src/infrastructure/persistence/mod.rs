//! # Persistence Layer
//!
//! The listing source.
//!
//! Exposes the full, unordered collection of listing records on demand.
//! No filtering happens here - the matching engine receives the whole
//! snapshot and applies its own eligibility rules.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryListingRepository;
pub use traits::{ListingRepository, RepositoryError, RepositoryResult};

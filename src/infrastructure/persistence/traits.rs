//! # Repository Traits
//!
//! Port definitions for the listing source.

use crate::domain::entities::Listing;
use crate::domain::value_objects::ListingId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Repository-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A listing with the same ID already exists.
    #[error("listing already exists: {0}")]
    AlreadyExists(ListingId),

    /// Backend storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// The listing source.
///
/// Supplies the full collection of candidate listings as already-structured
/// records. The matching engine operates on the returned snapshot and never
/// re-reads the source mid-computation.
#[async_trait]
pub trait ListingRepository: Send + Sync + fmt::Debug {
    /// Returns a snapshot of all listings currently available.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn all(&self) -> RepositoryResult<Vec<Listing>>;

    /// Returns the listing with the given ID, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn get(&self, id: ListingId) -> RepositoryResult<Option<Listing>>;

    /// Adds a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::AlreadyExists`] if a listing with the
    /// same ID is already stored.
    async fn add(&self, listing: Listing) -> RepositoryResult<()>;
}

//! # In-Memory Listing Repository
//!
//! In-memory implementation of [`ListingRepository`].
//!
//! Uses a thread-safe `BTreeMap` keyed by listing ID, so snapshots come
//! back in a stable id order and repeated matching runs see identical
//! input sequences.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::infrastructure::persistence::InMemoryListingRepository;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let repo = InMemoryListingRepository::new();
//! assert!(repo.is_empty().await);
//!
//! let seeded = InMemoryListingRepository::with_demo_listings().unwrap();
//! assert!(!seeded.is_empty().await);
//! # });
//! ```

use crate::domain::entities::Listing;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{
    Currency, ListingId, ListingSide, Price, Quantity, Unit, UserId,
};
use crate::infrastructure::persistence::traits::{
    ListingRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ListingRepository`].
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<BTreeMap>>` for thread-safe access; clones share the
/// same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingRepository {
    storage: Arc<RwLock<BTreeMap<ListingId, Listing>>>,
}

impl InMemoryListingRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the demo marketplace listings.
    ///
    /// The seed mirrors the demo data set: eleven selling listings and
    /// five buying listings across common produce, all priced in rupees.
    ///
    /// # Errors
    ///
    /// Returns a domain error if any seed record fails validation.
    pub fn with_demo_listings() -> DomainResult<Self> {
        let mut storage = BTreeMap::new();
        for listing in demo_listings()? {
            storage.insert(listing.id(), listing);
        }
        Ok(Self {
            storage: Arc::new(RwLock::new(storage)),
        })
    }

    /// Returns the number of stored listings.
    pub async fn len(&self) -> usize {
        let storage = self.storage.read().await;
        storage.len()
    }

    /// Returns true if no listings are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes all listings.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn all(&self) -> RepositoryResult<Vec<Listing>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn get(&self, id: ListingId) -> RepositoryResult<Option<Listing>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn add(&self, listing: Listing) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if storage.contains_key(&listing.id()) {
            return Err(RepositoryError::AlreadyExists(listing.id()));
        }
        storage.insert(listing.id(), listing);
        Ok(())
    }
}

/// Builds the demo marketplace data set.
fn demo_listings() -> DomainResult<Vec<Listing>> {
    let seed = |id: u64,
                owner: &str,
                side: ListingSide,
                product: &str,
                quantity: f64,
                unit: &str,
                price: f64,
                currency: &str|
     -> DomainResult<Listing> {
        Listing::new(
            ListingId::new(id),
            UserId::new(owner)?,
            side,
            product,
            Quantity::new(quantity)?,
            Some(Unit::new(unit)?),
            Price::new(price)?,
            Some(Currency::new(currency)?),
        )
    };

    use ListingSide::{Buying, Selling};
    Ok(vec![
        // Seller listings (what sellers are offering)
        seed(1, "seller_A", Selling, "apples", 100.0, "kg", 9.0, "rupees")?,
        seed(2, "seller_B", Selling, "apples", 120.0, "kg", 11.0, "rupees")?,
        seed(3, "seller_C", Selling, "apples", 90.0, "kg", 10.0, "rupees")?,
        seed(4, "seller_D", Selling, "rice", 50.0, "kg", 50.0, "rupees")?,
        seed(5, "seller_E", Selling, "milk", 10.0, "liter", 5.0, "rupees")?,
        seed(6, "seller_F", Selling, "sugar", 500.0, "kg", 30.0, "rupees")?,
        seed(9, "seller_G", Selling, "coffee", 2.0, "kg", 25.0, "rupees")?,
        seed(10, "seller_H", Selling, "tea", 500.0, "gram", 15.0, "rupees")?,
        seed(11, "seller_I", Selling, "chicken", 5.0, "kg", 20.0, "rupees")?,
        seed(12, "seller_J", Selling, "oranges", 20.0, "dozen", 3.0, "rupees")?,
        seed(13, "seller_K", Selling, "potatoes", 200.0, "kg", 5.0, "rupees")?,
        // Buyer listings (what buyers are looking for)
        seed(7, "buyer_X", Buying, "rice", 20.0, "kg", 45.0, "rupees")?,
        seed(8, "buyer_Y", Buying, "sugar", 100.0, "kg", 32.0, "rupees")?,
        seed(14, "buyer_Z", Buying, "coffee", 1.0, "kg", 20.0, "rupees")?,
        seed(15, "buyer_AA", Buying, "chicken", 10.0, "kg", 18.0, "rupees")?,
        seed(16, "buyer_BB", Buying, "apples", 80.0, "kg", 9.5, "rupees")?,
    ])
}

//! # Find Matches Use Case
//!
//! Orchestrates one matching interaction: extract a structured request
//! from the participant's utterance, snapshot the listing source, and rank
//! the snapshot with the matching engine.
//!
//! The engine itself stays pure; this use case owns the collaborator
//! boundaries (extractor, listing source) and the error mapping.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::matching_engine::{MatchResult, MatchingEngine};
use crate::domain::entities::TradeRequest;
use crate::domain::value_objects::Role;
use crate::infrastructure::extraction::EntityExtractor;
use crate::infrastructure::persistence::ListingRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Response from the find matches use case.
#[derive(Debug, Clone)]
pub struct FindMatchesResponse {
    /// The structured request the extractor produced.
    pub request: TradeRequest,
    /// The ranked matches, best first, at most three.
    pub matches: Vec<MatchResult>,
}

impl FindMatchesResponse {
    /// Returns true if the extractor recognized a product.
    ///
    /// Without a product nothing can match; callers typically re-prompt.
    #[must_use]
    pub fn has_product(&self) -> bool {
        self.request.has_product()
    }
}

/// Use case for finding the best counterparties for an utterance.
#[derive(Debug, Clone)]
pub struct FindMatchesUseCase {
    extractor: Arc<dyn EntityExtractor>,
    listings: Arc<dyn ListingRepository>,
    engine: MatchingEngine,
}

impl FindMatchesUseCase {
    /// Creates a new use case over the given collaborators.
    #[must_use]
    pub fn new(extractor: Arc<dyn EntityExtractor>, listings: Arc<dyn ListingRepository>) -> Self {
        Self {
            extractor,
            listings,
            engine: MatchingEngine::new(),
        }
    }

    /// Extracts a request from the utterance and ranks the current listing
    /// snapshot for the given role.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ExtractionFailed`] if the extractor
    /// fails and [`ApplicationError::RepositoryError`] if the listing
    /// source cannot be read. An utterance without a recognizable product
    /// is not an error: the response simply carries no matches.
    pub async fn execute(&self, text: &str, role: Role) -> ApplicationResult<FindMatchesResponse> {
        let request = self
            .extractor
            .extract(text)
            .await
            .map_err(|e| ApplicationError::extraction(e.to_string()))?;
        debug!(?request, %role, "extracted trade request");

        self.execute_request(request, role).await
    }

    /// Ranks the current listing snapshot against an already-structured
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::RepositoryError`] if the listing source
    /// cannot be read.
    pub async fn execute_request(
        &self,
        request: TradeRequest,
        role: Role,
    ) -> ApplicationResult<FindMatchesResponse> {
        let snapshot = self
            .listings
            .all()
            .await
            .map_err(|e| ApplicationError::repository(e.to_string()))?;

        let matches = self.engine.rank(&request, &snapshot, role);
        info!(
            %role,
            product = request.product().unwrap_or("-"),
            candidates = snapshot.len(),
            matched = matches.len(),
            "ranked listing snapshot"
        );

        Ok(FindMatchesResponse { request, matches })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::infrastructure::extraction::{ExtractionPatterns, RuleBasedExtractor};
    use crate::infrastructure::persistence::InMemoryListingRepository;

    fn use_case() -> FindMatchesUseCase {
        let extractor =
            Arc::new(RuleBasedExtractor::new(&ExtractionPatterns::default()).unwrap());
        let listings = Arc::new(InMemoryListingRepository::with_demo_listings().unwrap());
        FindMatchesUseCase::new(extractor, listings)
    }

    #[tokio::test]
    async fn buyer_request_ranks_apple_sellers() {
        let response = use_case()
            .execute("I want 100 kg apples for 10 rupees per kg", Role::Buyer)
            .await
            .unwrap();

        assert!(response.has_product());
        assert_eq!(response.matches.len(), 3);
        assert_eq!(response.matches[0].listing.owner().as_str(), "seller_A");
        assert_eq!(response.matches[0].score, 10);
    }

    #[tokio::test]
    async fn seller_request_ranks_rice_buyers() {
        let response = use_case()
            .execute("20 kg rice at 45 rupees per kg", Role::Seller)
            .await
            .unwrap();

        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].listing.owner().as_str(), "buyer_X");
        assert_eq!(response.matches[0].score, 10);
    }

    #[tokio::test]
    async fn unrecognized_product_yields_no_matches() {
        let response = use_case()
            .execute("I want 100 kg mangoes", Role::Buyer)
            .await
            .unwrap();

        assert!(!response.has_product());
        assert!(response.matches.is_empty());
    }

    #[tokio::test]
    async fn product_only_request_yields_no_matches() {
        let response = use_case()
            .execute("do you have apples", Role::Buyer)
            .await
            .unwrap();

        assert!(response.has_product());
        assert!(response.matches.is_empty());
    }
}

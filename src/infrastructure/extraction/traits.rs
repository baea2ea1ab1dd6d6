//! # Extraction Traits
//!
//! Port definition for entity extraction.

use crate::domain::entities::TradeRequest;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Extraction-level error.
///
/// Unrecognized fields are not errors - they come back as absent fields on
/// the request. An error here means the extractor itself could not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// A configured pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// The extraction backend failed.
    #[error("extraction backend error: {0}")]
    Backend(String),
}

/// Result type for extraction operations.
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Extracts a structured trade request from free-form text.
///
/// Every field of the returned request is optional: the extractor fills in
/// whatever it recognized and leaves the rest absent. It never guesses a
/// default value.
#[async_trait]
pub trait EntityExtractor: Send + Sync + fmt::Debug {
    /// Extracts a trade request from the given utterance.
    ///
    /// # Errors
    ///
    /// Returns an error only if the extractor itself fails; unrecognized
    /// fields are reported as absent, not as errors.
    async fn extract(&self, text: &str) -> ExtractionResult<TradeRequest>;
}

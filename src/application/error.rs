//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Caller contract violations (an unrecognized role token, a failing
//! listing source) surface immediately as typed errors and are never
//! silently defaulted. Incomplete request data is not an error: a missing
//! quantity or price simply disables that scoring dimension.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ParseRoleError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Caller contract violation (e.g., an unrecognized role).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity extraction failed.
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),

    /// Listing source failure.
    #[error("repository error: {0}")]
    RepositoryError(String),

    /// Domain error.
    #[error("domain error: {0}")]
    DomainError(#[from] DomainError),
}

impl ApplicationError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an extraction error.
    #[must_use]
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::ExtractionFailed(message.into())
    }

    /// Creates a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::RepositoryError(message.into())
    }
}

impl From<ParseRoleError> for ApplicationError {
    fn from(error: ParseRoleError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_error_maps_to_invalid_argument() {
        let error: ApplicationError = ParseRoleError("broker".to_string()).into();
        assert!(matches!(error, ApplicationError::InvalidArgument(_)));
        assert!(error.to_string().contains("broker"));
    }

    #[test]
    fn domain_error_is_wrapped() {
        let error: ApplicationError =
            DomainError::InvalidPrice("price must be positive".to_string()).into();
        assert!(matches!(error, ApplicationError::DomainError(_)));
    }
}

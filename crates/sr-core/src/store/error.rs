use serde::Serialize;
use thiserror::Error;

/// Faults surfaced by the store.
///
/// Absence of a book is not an error; lookups return `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum StoreError {
    /// The catalog could not be populated. Retry by loading again.
    #[error("failed to load catalog: {0}")]
    LoadFailure(String),

    /// A single recommendation request failed; earlier results are kept.
    #[error("failed to fetch recommendations: {0}")]
    RecommendationFailure(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    pub fn is_load_failure(&self) -> bool {
        matches!(self, StoreError::LoadFailure(_))
    }

    pub fn is_recommendation_failure(&self) -> bool {
        matches!(self, StoreError::RecommendationFailure(_))
    }
}

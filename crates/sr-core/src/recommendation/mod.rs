//! Recommendation domain: algorithm identifiers, result sets and the
//! selection policies that produce them.

mod algorithm;
pub mod policy;
mod set;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use set::{RecommendationSet, DEFAULT_RECOMMENDATION_COUNT};

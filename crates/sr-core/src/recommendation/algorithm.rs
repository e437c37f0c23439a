use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier outside the closed algorithm set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown recommendation algorithm: {0:?}")]
pub struct UnknownAlgorithm(pub String);

/// Recommendation algorithm selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Cosine,
    Knn,
    Matrix,
    Cluster,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Cosine,
        Algorithm::Knn,
        Algorithm::Matrix,
        Algorithm::Cluster,
    ];

    /// Wire identifier, as used by views and config.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Cosine => "cosine",
            Algorithm::Knn => "knn",
            Algorithm::Matrix => "matrix",
            Algorithm::Cluster => "cluster",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Cosine => "Cosine Similarity",
            Algorithm::Knn => "K-Nearest Neighbors",
            Algorithm::Matrix => "Matrix Factorization",
            Algorithm::Cluster => "Clustering",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Cosine => "Content-based filtering using vector similarity",
            Algorithm::Knn => "Find similar books based on user preferences",
            Algorithm::Matrix => "Collaborative filtering using SVD",
            Algorithm::Cluster => "Group similar books by attributes",
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_algorithm_is_cosine() {
        assert_eq!(Algorithm::default(), Algorithm::Cosine);
    }

    #[test]
    fn every_identifier_parses_back() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "svm".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("svm".to_string()));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Matrix".parse::<Algorithm>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_identifiers() {
        let value = serde_json::to_value(Algorithm::Knn).unwrap();
        assert_eq!(value, serde_json::json!("knn"));
    }
}

//! Selection policies implementing [`SelectionStrategyPort`](crate::ports::SelectionStrategyPort).

mod router;
mod shuffle;
mod similarity;

pub use router::AlgorithmRouter;
pub use shuffle::{shuffle_in_place, ShuffleSelection};
pub use similarity::{ContentSimilarity, FeatureSpace, SimilarityMetric};

//! Dataset analytics and the published algorithm metrics.

mod performance;
mod stats;

pub use performance::AlgorithmPerformance;
pub use stats::DatasetStats;

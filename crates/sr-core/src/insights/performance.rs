use serde::Serialize;

use crate::recommendation::Algorithm;

/// Published evaluation figures for one algorithm.
///
/// These are fixed demo numbers, not measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmPerformance {
    pub algorithm: Algorithm,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub training_time: &'static str,
    pub prediction_time: &'static str,
}

impl AlgorithmPerformance {
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        let (accuracy, precision, recall, f1_score, training_time, prediction_time) =
            match algorithm {
                Algorithm::Cosine => (87.2, 0.84, 0.82, 0.83, "1.2s", "0.003s"),
                Algorithm::Knn => (82.5, 0.78, 0.75, 0.76, "N/A", "0.8s"),
                Algorithm::Matrix => (91.3, 0.88, 0.86, 0.87, "45s", "0.005s"),
                Algorithm::Cluster => (79.4, 0.76, 0.74, 0.75, "18s", "0.002s"),
            };
        Self {
            algorithm,
            accuracy,
            precision,
            recall,
            f1_score,
            training_time,
            prediction_time,
        }
    }

    /// Figures for every algorithm, in selector order.
    pub fn table() -> Vec<Self> {
        Algorithm::ALL.into_iter().map(Self::for_algorithm).collect()
    }
}

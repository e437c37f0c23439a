use anyhow::Result;

use sr_core::insights::AlgorithmPerformance;
use sr_core::Algorithm;

/// Published evaluation table for the selectable algorithms.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetAlgorithmPerformance;

impl GetAlgorithmPerformance {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<Vec<AlgorithmPerformance>> {
        Ok(AlgorithmPerformance::table())
    }

    pub async fn execute_for(&self, algorithm: Algorithm) -> Result<AlgorithmPerformance> {
        Ok(AlgorithmPerformance::for_algorithm(algorithm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_table_lists_all_algorithms() {
        let table = GetAlgorithmPerformance::new().execute().await.unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table[0].algorithm, Algorithm::Cosine);
    }

    #[tokio::test]
    async fn test_knn_has_no_training_time() {
        let row = GetAlgorithmPerformance::new()
            .execute_for(Algorithm::Knn)
            .await
            .unwrap();

        assert_eq!(row.training_time, "N/A");
        assert_eq!(row.accuracy, 82.5);
    }
}

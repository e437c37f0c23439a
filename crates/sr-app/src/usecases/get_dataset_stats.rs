use anyhow::Result;
use std::sync::Arc;

use sr_core::insights::DatasetStats;

use crate::BookStore;

/// Summary statistics over the loaded catalog.
pub struct GetDatasetStats {
    store: Arc<BookStore>,
}

impl GetDatasetStats {
    pub fn from_arc(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// Returns an error when the catalog is empty (not loaded, or failed).
    pub async fn execute(&self) -> Result<DatasetStats> {
        let books = self.store.books().await;
        DatasetStats::from_books(&books)
            .ok_or_else(|| anyhow::anyhow!("Dataset is empty; load the catalog first"))
    }
}

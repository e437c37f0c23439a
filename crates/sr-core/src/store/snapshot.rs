use serde::Serialize;

use super::{CatalogStatus, RequestStatus, StoreError};
use crate::book::Book;
use crate::recommendation::{Algorithm, RecommendationSet};

/// Which part of the store changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreChange {
    CatalogLoading,
    CatalogLoaded,
    CatalogFailed,
    CatalogCancelled,
    RecentlyViewed,
    Algorithm,
    RecommendationsLoading,
    RecommendationsReady,
    RecommendationsFailed,
    RecommendationsCancelled,
}

/// Owned copy of everything views may read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreSnapshot {
    pub books: Vec<Book>,
    pub recently_viewed: Vec<Book>,
    pub recommendations: Option<RecommendationSet>,
    pub active_algorithm: Algorithm,
    pub catalog_status: CatalogStatus,
    pub recommendation_status: RequestStatus,
    pub error: Option<StoreError>,
}

impl StoreSnapshot {
    /// Single shared loading flag: true while either operation is in flight.
    pub fn loading(&self) -> bool {
        self.catalog_status == CatalogStatus::Loading
            || self.recommendation_status == RequestStatus::Loading
    }

    pub fn recommended_books(&self) -> &[Book] {
        self.recommendations
            .as_ref()
            .map(|set| set.books.as_slice())
            .unwrap_or(&[])
    }
}

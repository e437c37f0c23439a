//! Algorithm routing through the store with content-based strategies.

use std::sync::Arc;

use sr_app::{BookStore, StoreConfig, StoreDeps};
use sr_core::recommendation::policy::{AlgorithmRouter, ContentSimilarity, ShuffleSelection};
use sr_core::{Algorithm, BookId};
use sr_infra::{EmbeddedCatalogSource, SeededRandomSource, TokioLatency, WatchStoreEvents};

async fn content_store() -> Arc<BookStore> {
    let router = AlgorithmRouter::new(Arc::new(ShuffleSelection::new(Arc::new(
        SeededRandomSource::new(3),
    ))))
    .with_route(Algorithm::Cosine, Arc::new(ContentSimilarity::cosine()))
    .with_route(Algorithm::Knn, Arc::new(ContentSimilarity::nearest_neighbors()));

    let store = BookStore::new(
        StoreDeps {
            catalog_source: Arc::new(EmbeddedCatalogSource::new()),
            selection: Arc::new(router),
            latency: Arc::new(TokioLatency::none()),
            events: Arc::new(WatchStoreEvents::new()),
        },
        StoreConfig::default(),
    )
    .arc();
    store.load_catalog().await.unwrap();
    store
}

#[tokio::test]
async fn cosine_pairs_the_hobbit_with_the_lord_of_the_rings() {
    let store = content_store().await;

    let outcome = store
        .request_recommendations(BookId::new(8), Some(Algorithm::Cosine))
        .await
        .unwrap();

    let set = outcome.applied().unwrap();
    assert_eq!(set.ids()[0], BookId::new(11));
    assert_eq!(set.len(), 5);
}

#[tokio::test]
async fn knn_pairs_the_lord_of_the_rings_with_the_hobbit() {
    let store = content_store().await;

    let outcome = store
        .request_recommendations(BookId::new(11), Some(Algorithm::Knn))
        .await
        .unwrap();

    assert_eq!(outcome.applied().unwrap().ids()[0], BookId::new(8));
}

#[tokio::test]
async fn content_results_are_deterministic() {
    let store = content_store().await;

    let first = store
        .request_recommendations(BookId::new(2), None)
        .await
        .unwrap();
    let second = store
        .request_recommendations(BookId::new(2), None)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unrouted_algorithms_still_exclude_the_reference() {
    let store = content_store().await;

    let outcome = store
        .request_recommendations(BookId::new(8), Some(Algorithm::Matrix))
        .await
        .unwrap();

    let set = outcome.applied().unwrap();
    assert_eq!(set.algorithm, Algorithm::Matrix);
    assert!(!set.ids().contains(&BookId::new(8)));
}

//! One-shot demo run: load, open a book, collect the read-side views.

use anyhow::Context;
use serde::Serialize;
use sr_app::usecases::{FeaturedBooks, GetAlgorithmPerformance, GetDatasetStats};
use sr_core::insights::{AlgorithmPerformance, DatasetStats};
use sr_core::{Book, BookId, StoreSnapshot};
use tracing::{info, info_span, Instrument};

use super::wiring::WiredStore;

const FEATURED_COUNT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct DemoRequest {
    /// Book to open; the first catalog entry when absent.
    pub book: Option<BookId>,
    /// Algorithm id to select before opening the book.
    pub algorithm: Option<String>,
}

/// Everything the demo shows, ready for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub opened: Book,
    pub featured: Vec<Book>,
    pub stats: DatasetStats,
    pub performance: Vec<AlgorithmPerformance>,
    pub store: StoreSnapshot,
}

pub async fn run_demo(wired: &WiredStore, request: DemoRequest) -> anyhow::Result<DemoReport> {
    let span = info_span!("bootstrap.run_demo", book = ?request.book);
    async {
        let store = &wired.store;

        let outcome = store.load_catalog().await.context("Failed to load catalog")?;
        info!(?outcome, "catalog ready");

        if let Some(id) = request.algorithm.as_deref() {
            store
                .set_algorithm_by_id(id)
                .await
                .context("Failed to select algorithm")?;
        }

        let book_id = match request.book {
            Some(id) => id,
            None => store
                .books()
                .await
                .first()
                .map(|book| book.id)
                .context("Catalog is empty")?,
        };
        let opened = store
            .open_book(book_id)
            .await
            .context("Failed to fetch recommendations")?
            .with_context(|| format!("Book {book_id} not found"))?;

        let featured = FeaturedBooks::new(store.clone(), wired.random.clone())
            .execute(FEATURED_COUNT)
            .await?;
        let stats = GetDatasetStats::from_arc(store.clone()).execute().await?;
        let performance = GetAlgorithmPerformance::new().execute().await?;

        info!(last_change = ?wired.events.latest().change, "demo complete");

        Ok(DemoReport {
            opened,
            featured,
            stats,
            performance,
            store: store.snapshot().await,
        })
    }
    .instrument(span)
    .await
}

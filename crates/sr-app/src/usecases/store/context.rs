use std::collections::BTreeSet;
use std::sync::Arc;

use sr_core::{
    Algorithm, Catalog, CatalogStatus, RecentlyViewed, RecommendationSet, RequestStatus,
    StoreError, StoreSnapshot,
};
use tokio::sync::{Mutex, MutexGuard};

/// Sequence numbers of operations that started and have not settled yet.
/// 记录进行中的操作序号，只有最新的存活操作可以写入。
///
/// The newest live operation owns the store: an older one completing while
/// a newer one is still running, or after a newer one already settled, is
/// stale. Dropped operations leave the live set, so they never shadow an
/// older operation that is still running.
#[derive(Debug, Default)]
pub struct InFlight {
    issued: u64,
    settled: u64,
    live: BTreeSet<u64>,
}

impl InFlight {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.live.insert(self.issued);
        self.issued
    }

    /// Ends `sequence`. Returns true when it may write its result.
    pub fn finish(&mut self, sequence: u64) -> bool {
        self.live.remove(&sequence);
        let current = sequence > self.settled && self.live.range(sequence + 1..).next().is_none();
        if current {
            self.settled = sequence;
        }
        current
    }

    /// Drops `sequence` without a result. Returns true when nothing is left
    /// running.
    pub fn cancel(&mut self, sequence: u64) -> bool {
        self.live.remove(&sequence);
        self.live.is_empty()
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }
}

/// Mutable store state. Only touched through [`StoreContext::lock`].
#[derive(Debug, Default)]
pub struct StoreState {
    pub catalog: Catalog,
    pub catalog_status: CatalogStatus,
    pub loads: InFlight,
    pub recently_viewed: RecentlyViewed,
    pub algorithm: Algorithm,
    pub recommendations: Option<RecommendationSet>,
    pub recommendation_status: RequestStatus,
    pub requests: InFlight,
    pub error: Option<StoreError>,
}

impl StoreState {
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            recently_viewed: RecentlyViewed::with_capacity(capacity),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            books: self.catalog.books().to_vec(),
            recently_viewed: self.recently_viewed.entries().to_vec(),
            recommendations: self.recommendations.clone(),
            active_algorithm: self.algorithm,
            catalog_status: self.catalog_status,
            recommendation_status: self.recommendation_status,
            error: self.error.clone(),
        }
    }
}

/// Shared store context.
///
/// The lock is held for short critical sections only, never across the
/// simulated latency, so reads stay responsive while requests are in flight.
#[derive(Clone)]
pub struct StoreContext {
    state: Arc<Mutex<StoreState>>,
}

impl StoreContext {
    pub fn new(initial_state: StoreState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().await
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.lock().await.snapshot()
    }
}

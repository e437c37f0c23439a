//! Book store orchestrator.
//!
//! Owns the catalog, the view history, the active algorithm and the current
//! recommendation set, and drives the two asynchronous operations (catalog
//! load and recommendation fetch) through the status state machines.

use std::sync::Arc;

use sr_core::book::DEFAULT_HISTORY_CAPACITY;
use sr_core::ports::{
    CatalogSourcePort, LatencyKind, LatencyPort, SelectionStrategyPort, StoreEventPort,
};
use sr_core::recommendation::DEFAULT_RECOMMENDATION_COUNT;
use sr_core::store::{CatalogEvent, CatalogStateMachine, RequestEvent, RequestStateMachine};
use sr_core::{
    Algorithm, Book, BookId, Catalog, CatalogStatus, RecommendationSet, RequestStatus,
    StoreChange, StoreError, StoreSnapshot,
};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::context::{StoreContext, StoreState};
use crate::deps::StoreDeps;

/// Tunables for a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub history_capacity: usize,
    pub recommendation_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recommendation_count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }
}

/// Result of a catalog load that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// The catalog was populated with this many books.
    Loaded(usize),
    /// Nothing to do; the catalog was already loaded.
    AlreadyReady(usize),
    /// A newer load started while this one was waiting; its result was dropped.
    Superseded,
}

/// Result of a recommendation request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    Applied(RecommendationSet),
    /// A newer request was issued meanwhile; state was left untouched.
    Superseded,
}

impl RecommendationOutcome {
    pub fn applied(&self) -> Option<&RecommendationSet> {
        match self {
            RecommendationOutcome::Applied(set) => Some(set),
            RecommendationOutcome::Superseded => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    CatalogLoad,
    Recommendation,
}

/// 操作被取消时回滚 Loading 状态。
///
/// Armed while an operation is in flight. Dropping it armed (the future was
/// dropped or its task aborted) takes the operation out of the live set and,
/// when nothing else is running, settles the status it left in `Loading`.
struct InFlightGuard {
    context: StoreContext,
    events: Arc<dyn StoreEventPort>,
    operation: Operation,
    sequence: u64,
    armed: bool,
}

impl InFlightGuard {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let (operation, sequence) = (self.operation, self.sequence);
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(?operation, sequence, "no runtime to roll back cancelled operation");
            return;
        };
        let context = self.context.clone();
        let events = Arc::clone(&self.events);
        handle.spawn(async move {
            let mut state = context.lock().await;
            if let Some(change) = abandon(&mut state, operation, sequence) {
                events.emit_store_changed(change, state.snapshot()).await;
            }
        });
    }
}

fn abandon(state: &mut StoreState, operation: Operation, sequence: u64) -> Option<StoreChange> {
    match operation {
        Operation::CatalogLoad => {
            let idle = state.loads.cancel(sequence);
            debug!(sequence, idle, "catalog load cancelled");
            if !idle || state.catalog_status != CatalogStatus::Loading {
                return None;
            }
            state.catalog_status = CatalogStateMachine::transition(
                state.catalog_status,
                CatalogEvent::LoadCancelled,
            );
            info!(to = ?state.catalog_status, "catalog state transition");
            Some(StoreChange::CatalogCancelled)
        }
        Operation::Recommendation => {
            let idle = state.requests.cancel(sequence);
            debug!(sequence, idle, "recommendation request cancelled");
            if !idle || state.recommendation_status != RequestStatus::Loading {
                return None;
            }
            state.recommendation_status = RequestStateMachine::transition(
                state.recommendation_status,
                RequestEvent::Cancelled {
                    has_results: state.recommendations.is_some(),
                },
            );
            Some(StoreChange::RecommendationsCancelled)
        }
    }
}

/// The single source of truth for catalog, history and recommendations.
pub struct BookStore {
    context: StoreContext,
    catalog_source: Arc<dyn CatalogSourcePort>,
    selection: Arc<dyn SelectionStrategyPort>,
    latency: Arc<dyn LatencyPort>,
    events: Arc<dyn StoreEventPort>,
    config: StoreConfig,
}

impl BookStore {
    pub fn new(deps: StoreDeps, config: StoreConfig) -> Self {
        Self {
            context: StoreContext::new(StoreState::with_history_capacity(config.history_capacity)),
            catalog_source: deps.catalog_source,
            selection: deps.selection,
            latency: deps.latency,
            events: deps.events,
            config,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    async fn emit(&self, change: StoreChange, state: &StoreState) {
        self.events.emit_store_changed(change, state.snapshot()).await;
    }

    fn guard(&self, operation: Operation, sequence: u64) -> InFlightGuard {
        InFlightGuard {
            context: self.context.clone(),
            events: Arc::clone(&self.events),
            operation,
            sequence,
            armed: true,
        }
    }

    /// Populates the catalog from the catalog source.
    ///
    /// From `Uninitialized` or `Errored` this loads (a retry after failure).
    /// From `Ready` it is a no-op. From `Loading` it starts a fresh attempt
    /// and the older one completes as [`CatalogOutcome::Superseded`].
    ///
    /// Dropping the future before it settles withdraws the attempt. If no
    /// other load is running the status falls back to `Uninitialized`.
    pub async fn load_catalog(&self) -> Result<CatalogOutcome, StoreError> {
        let span = info_span!("usecase.book_store.load_catalog");
        async {
            let (generation, mut guard) = {
                let mut state = self.context.lock().await;
                if state.catalog_status == CatalogStatus::Ready {
                    let books = state.catalog.len();
                    debug!(books, "catalog already loaded");
                    return Ok(CatalogOutcome::AlreadyReady(books));
                }
                let from = state.catalog_status;
                state.catalog_status =
                    CatalogStateMachine::transition(from, CatalogEvent::LoadStarted);
                state.error = None;
                let generation = state.loads.begin();
                let guard = self.guard(Operation::CatalogLoad, generation);
                info!(from = ?from, to = ?state.catalog_status, "catalog state transition");
                self.emit(StoreChange::CatalogLoading, &state).await;
                (generation, guard)
            };

            self.latency.wait(LatencyKind::CatalogLoad).await;

            let loaded = match self.catalog_source.load_books().await {
                Ok(books) => Catalog::from_books(books).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            let mut state = self.context.lock().await;
            let current = state.loads.finish(generation);
            guard.disarm();
            if !current {
                debug!(generation, live = state.loads.live(), "catalog load superseded");
                return Ok(CatalogOutcome::Superseded);
            }

            match loaded {
                Ok(catalog) => {
                    let books = catalog.len();
                    state.catalog = catalog;
                    state.catalog_status = CatalogStateMachine::transition(
                        state.catalog_status,
                        CatalogEvent::LoadSucceeded,
                    );
                    info!(books, "catalog loaded");
                    self.emit(StoreChange::CatalogLoaded, &state).await;
                    Ok(CatalogOutcome::Loaded(books))
                }
                Err(message) => {
                    let err = StoreError::LoadFailure(message);
                    state.catalog = Catalog::empty();
                    state.catalog_status = CatalogStateMachine::transition(
                        state.catalog_status,
                        CatalogEvent::LoadFailed,
                    );
                    state.error = Some(err.clone());
                    error!(error = %err, "catalog load failed");
                    self.emit(StoreChange::CatalogFailed, &state).await;
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Runs [`load_catalog`](Self::load_catalog) on a detached task.
    pub fn spawn_load_catalog(
        self: &Arc<Self>,
    ) -> JoinHandle<Result<CatalogOutcome, StoreError>> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.load_catalog().await })
    }

    /// Looks a book up by id. Unknown ids are `None`.
    pub async fn get_book(&self, id: BookId) -> Option<Book> {
        self.context.lock().await.catalog.get(id).cloned()
    }

    /// Moves `book` to the front of the view history.
    pub async fn record_view(&self, book: Book) {
        let mut state = self.context.lock().await;
        debug!(book_id = %book.id, "recording view");
        state.recently_viewed.record(book);
        self.emit(StoreChange::RecentlyViewed, &state).await;
    }

    pub async fn set_algorithm(&self, algorithm: Algorithm) {
        let mut state = self.context.lock().await;
        if state.algorithm != algorithm {
            info!(from = %state.algorithm, to = %algorithm, "active algorithm changed");
        }
        state.algorithm = algorithm;
        self.emit(StoreChange::Algorithm, &state).await;
    }

    /// String form of [`set_algorithm`](Self::set_algorithm). Unknown ids are
    /// rejected and leave the selection unchanged.
    pub async fn set_algorithm_by_id(&self, id: &str) -> Result<Algorithm, StoreError> {
        let algorithm: Algorithm = id.parse().map_err(|e: sr_core::UnknownAlgorithm| {
            warn!(id, "rejected algorithm id");
            StoreError::InvalidArgument(e.to_string())
        })?;
        self.set_algorithm(algorithm).await;
        Ok(algorithm)
    }

    /// Fetches recommendations for `book_id`.
    ///
    /// `algorithm` overrides the active selection for this request only. A
    /// request that is overtaken by a later one before it completes returns
    /// [`RecommendationOutcome::Superseded`] and changes nothing. A dropped
    /// request stops counting as "later": older requests still running can
    /// then apply their results.
    pub async fn request_recommendations(
        &self,
        book_id: BookId,
        algorithm: Option<Algorithm>,
    ) -> Result<RecommendationOutcome, StoreError> {
        let span = info_span!("usecase.book_store.request_recommendations", book_id = %book_id);
        async {
            let (sequence, algorithm, mut guard) = {
                let mut state = self.context.lock().await;
                let algorithm = algorithm.unwrap_or(state.algorithm);
                let sequence = state.requests.begin();
                let guard = self.guard(Operation::Recommendation, sequence);
                state.recommendation_status = RequestStateMachine::transition(
                    state.recommendation_status,
                    RequestEvent::Started,
                );
                state.error = None;
                debug!(sequence, %algorithm, "recommendation request started");
                self.emit(StoreChange::RecommendationsLoading, &state).await;
                (sequence, algorithm, guard)
            };

            self.latency.wait(LatencyKind::Recommendation).await;

            let mut state = self.context.lock().await;
            let current = state.requests.finish(sequence);
            guard.disarm();
            if !current {
                debug!(sequence, live = state.requests.live(), "recommendation result superseded");
                return Ok(RecommendationOutcome::Superseded);
            }

            match self.select(&state, book_id, algorithm) {
                Ok(set) => {
                    info!(count = set.len(), %algorithm, "recommendations ready");
                    state.recommendations = Some(set.clone());
                    state.recommendation_status = RequestStateMachine::transition(
                        state.recommendation_status,
                        RequestEvent::Completed,
                    );
                    self.emit(StoreChange::RecommendationsReady, &state).await;
                    Ok(RecommendationOutcome::Applied(set))
                }
                Err(err) => {
                    warn!(error = %err, "recommendation request failed");
                    state.recommendation_status = RequestStateMachine::transition(
                        state.recommendation_status,
                        RequestEvent::Failed,
                    );
                    state.error = Some(err.clone());
                    self.emit(StoreChange::RecommendationsFailed, &state).await;
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Runs [`request_recommendations`](Self::request_recommendations) on a
    /// detached task.
    pub fn spawn_request_recommendations(
        self: &Arc<Self>,
        book_id: BookId,
        algorithm: Option<Algorithm>,
    ) -> JoinHandle<Result<RecommendationOutcome, StoreError>> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.request_recommendations(book_id, algorithm).await })
    }

    fn select(
        &self,
        state: &StoreState,
        book_id: BookId,
        algorithm: Algorithm,
    ) -> Result<RecommendationSet, StoreError> {
        if state.catalog_status != CatalogStatus::Ready {
            return Err(StoreError::RecommendationFailure(
                "catalog is not loaded".to_string(),
            ));
        }
        if !state.catalog.contains(book_id) {
            return Err(StoreError::RecommendationFailure(format!(
                "book {book_id} is not in the catalog"
            )));
        }

        let count = self.config.recommendation_count;
        let selected = self
            .selection
            .select(state.catalog.books(), book_id, count, algorithm)
            .map_err(|e| StoreError::RecommendationFailure(e.to_string()))?;
        Ok(RecommendationSet::from_selection(
            book_id, algorithm, selected, count,
        ))
    }

    /// Book details flow: resolve, record the view, then fetch
    /// recommendations with the active algorithm.
    ///
    /// Unknown ids return `Ok(None)` and change nothing.
    pub async fn open_book(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        let Some(book) = self.get_book(id).await else {
            debug!(book_id = %id, "open_book: unknown id");
            return Ok(None);
        };
        self.record_view(book.clone()).await;
        self.request_recommendations(id, None).await?;
        Ok(Some(book))
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.context.snapshot().await
    }

    pub async fn books(&self) -> Vec<Book> {
        self.context.lock().await.catalog.books().to_vec()
    }

    pub async fn recently_viewed(&self) -> Vec<Book> {
        self.context.lock().await.recently_viewed.entries().to_vec()
    }

    pub async fn recommendations(&self) -> Option<RecommendationSet> {
        self.context.lock().await.recommendations.clone()
    }

    pub async fn active_algorithm(&self) -> Algorithm {
        self.context.lock().await.algorithm
    }

    pub async fn catalog_status(&self) -> CatalogStatus {
        self.context.lock().await.catalog_status
    }

    /// True while a catalog load or a recommendation request is in flight.
    pub async fn is_loading(&self) -> bool {
        self.context.snapshot().await.loading()
    }

    pub async fn error(&self) -> Option<StoreError> {
        self.context.lock().await.error.clone()
    }
}

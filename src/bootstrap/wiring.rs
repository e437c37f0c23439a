//! # Dependency Injection / 依赖注入模块
//!
//! Builds the concrete adapters and hands them to the store. The only place
//! that depends on `sr-infra`, `sr-app` and `sr-core` at once.
//!
//! ## Responsibilities / 职责
//!
//! - Create infra implementations (catalog, rand, timers, events) / 创建 infra 层具体实现
//! - Reject config values the store cannot run with / 拒绝无法使用的配置值
//! - Inject everything into [`BookStore`] / 将所有依赖注入到 BookStore
//!
//! ## Prohibited / 禁止事项
//!
//! **No store logic / 禁止包含任何业务逻辑**: it assembles but does not decide
//! how recommendations are chosen.

use std::str::FromStr;
use std::sync::Arc;

use sr_app::{BookStore, StoreConfig, StoreDeps};
use sr_core::config::AppConfig;
use sr_core::ports::{CatalogSourcePort, RandomSourcePort, SelectionStrategyPort};
use sr_core::recommendation::policy::{AlgorithmRouter, ContentSimilarity, ShuffleSelection};
use sr_core::Algorithm;
use sr_infra::{
    EmbeddedCatalogSource, JsonFileCatalogSource, SeededRandomSource, ThreadRandomSource,
    TokioLatency, WatchStoreEvents,
};
use tracing::info;

/// Largest accepted `[history] capacity`.
pub const MAX_HISTORY_CAPACITY: usize = 100;
/// Largest accepted `[recommendation] count`.
pub const MAX_RECOMMENDATION_COUNT: usize = 100;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("unknown recommendation mode '{0}' (expected 'simulated' or 'content')")]
    UnknownMode(String),

    #[error("{key} = {value} is out of range (0..={max})")]
    OutOfRange {
        key: &'static str,
        value: usize,
        max: usize,
    },
}

fn check_range(key: &'static str, value: usize, max: usize) -> WiringResult<usize> {
    if value > max {
        return Err(WiringError::OutOfRange { key, value, max });
    }
    Ok(value)
}

/// How algorithm selection maps onto selection strategies.
/// 算法到选择策略的映射方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecommendationMode {
    /// Every algorithm draws a random sample; results ignore the choice.
    #[default]
    Simulated,
    /// Cosine and k-NN rank by content features; the others stay random.
    Content,
}

impl FromStr for RecommendationMode {
    type Err = WiringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(RecommendationMode::Simulated),
            "content" => Ok(RecommendationMode::Content),
            other => Err(WiringError::UnknownMode(other.to_string())),
        }
    }
}

/// The assembled store plus the adapters callers may want direct access to.
pub struct WiredStore {
    pub store: Arc<BookStore>,
    pub events: Arc<WatchStoreEvents>,
    pub random: Arc<dyn RandomSourcePort>,
    pub mode: RecommendationMode,
}

pub fn build_random(seed: Option<u64>) -> Arc<dyn RandomSourcePort> {
    match seed {
        Some(seed) => Arc::new(SeededRandomSource::new(seed)),
        None => Arc::new(ThreadRandomSource::new()),
    }
}

pub fn build_selection(
    mode: RecommendationMode,
    random: Arc<dyn RandomSourcePort>,
) -> Arc<dyn SelectionStrategyPort> {
    let router = AlgorithmRouter::new(Arc::new(ShuffleSelection::new(random)));
    let router = match mode {
        RecommendationMode::Simulated => router,
        RecommendationMode::Content => router
            .with_route(Algorithm::Cosine, Arc::new(ContentSimilarity::cosine()))
            .with_route(Algorithm::Knn, Arc::new(ContentSimilarity::nearest_neighbors())),
    };
    Arc::new(router)
}

fn build_catalog_source(config: &AppConfig) -> Arc<dyn CatalogSourcePort> {
    match &config.catalog_path {
        Some(path) => Arc::new(JsonFileCatalogSource::new(path.clone())),
        None => Arc::new(EmbeddedCatalogSource::new()),
    }
}

/// Wires a store from configuration.
///
/// # Errors
///
/// Fails on a recommendation mode it does not recognise, or on a history
/// capacity or recommendation count above its limit.
pub fn wire_store(config: &AppConfig) -> WiringResult<WiredStore> {
    let mode: RecommendationMode = config.recommendation_mode.parse()?;
    let store_config = StoreConfig {
        history_capacity: check_range(
            "history.capacity",
            config.history_capacity,
            MAX_HISTORY_CAPACITY,
        )?,
        recommendation_count: check_range(
            "recommendation.count",
            config.recommendation_count,
            MAX_RECOMMENDATION_COUNT,
        )?,
    };
    let random = build_random(config.random_seed);
    let events = Arc::new(WatchStoreEvents::new());

    let deps = StoreDeps {
        catalog_source: build_catalog_source(config),
        selection: build_selection(mode, random.clone()),
        latency: Arc::new(TokioLatency::from_millis(
            config.catalog_latency_ms,
            config.recommendation_latency_ms,
        )),
        events: events.clone(),
    };

    let catalog = match &config.catalog_path {
        Some(path) => path.display().to_string(),
        None => "embedded".to_string(),
    };
    info!(?mode, %catalog, seeded = config.random_seed.is_some(), "store wired");

    Ok(WiredStore {
        store: BookStore::new(deps, store_config).arc(),
        events,
        random,
        mode,
    })
}

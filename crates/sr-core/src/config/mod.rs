//! # Configuration DTO / 配置数据对象
//!
//! TOML is mapped onto [`AppConfig`]. Missing keys fall back to the reference
//! demo values. Interpreting the values (e.g. the recommendation mode) is the
//! bootstrap layer's job.
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射

use std::path::PathBuf;

use crate::book::DEFAULT_HISTORY_CAPACITY;
use crate::recommendation::DEFAULT_RECOMMENDATION_COUNT;

pub const DEFAULT_CATALOG_LATENCY_MS: u64 = 1000;
pub const DEFAULT_RECOMMENDATION_LATENCY_MS: u64 = 1500;
pub const DEFAULT_RECOMMENDATION_MODE: &str = "simulated";

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON dataset to load instead of the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    pub catalog_latency_ms: u64,

    pub recommendation_latency_ms: u64,

    /// Raw mode name, e.g. `simulated` or `content`.
    pub recommendation_mode: String,

    pub recommendation_count: usize,

    /// Seed for reproducible shuffles.
    pub random_seed: Option<u64>,

    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            catalog_latency_ms: DEFAULT_CATALOG_LATENCY_MS,
            recommendation_latency_ms: DEFAULT_RECOMMENDATION_LATENCY_MS,
            recommendation_mode: DEFAULT_RECOMMENDATION_MODE.to_string(),
            recommendation_count: DEFAULT_RECOMMENDATION_COUNT,
            random_seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

fn lookup<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}

/// Reads an unsigned integer. Negative values are an error rather than a
/// wrapped cast.
fn unsigned(value: &toml::Value, section: &str, key: &str) -> anyhow::Result<Option<u64>> {
    match lookup(value, section, key).and_then(|v| v.as_integer()) {
        Some(n) => u64::try_from(n)
            .map(Some)
            .map_err(|_| anyhow::anyhow!("[{section}] {key} must not be negative, got {n}")),
        None => Ok(None),
    }
}

fn size(value: &toml::Value, section: &str, key: &str) -> anyhow::Result<Option<usize>> {
    unsigned(value, section, key)?
        .map(|n| {
            usize::try_from(n).map_err(|_| anyhow::anyhow!("[{section}] {key} is too large, got {n}"))
        })
        .transpose()
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// 从 TOML 值创建 AppConfig
    ///
    /// Values of the wrong type fall back to the defaults. Negative counts and
    /// latencies are rejected; upper bounds are left to the wiring layer.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            catalog_path: lookup(toml_value, "catalog", "path")
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
            catalog_latency_ms: unsigned(toml_value, "latency", "catalog_ms")?
                .unwrap_or(defaults.catalog_latency_ms),
            recommendation_latency_ms: unsigned(toml_value, "latency", "recommendation_ms")?
                .unwrap_or(defaults.recommendation_latency_ms),
            recommendation_mode: lookup(toml_value, "recommendation", "mode")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(defaults.recommendation_mode),
            recommendation_count: size(toml_value, "recommendation", "count")?
                .unwrap_or(defaults.recommendation_count),
            // Any i64 bit pattern is a usable seed.
            random_seed: lookup(toml_value, "recommendation", "seed")
                .and_then(|v| v.as_integer())
                .map(|v| v as u64),
            history_capacity: size(toml_value, "history", "capacity")?
                .unwrap_or(defaults.history_capacity),
        })
    }
}

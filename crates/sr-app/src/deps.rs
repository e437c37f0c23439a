//! # Store Dependencies / 存储依赖
//!
//! Parameter grouping for [`BookStore`](crate::BookStore) construction.
//! 此模块定义 BookStore 构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a builder. / 这不是 Builder 模式。
//! - No defaults / 无默认值
//! - No hidden logic / 无隐藏逻辑

use std::sync::Arc;

use sr_core::ports::{CatalogSourcePort, LatencyPort, SelectionStrategyPort, StoreEventPort};

/// Everything the store talks to. All fields are required.
/// 存储依赖分组（仅参数打包，所有字段必填）
pub struct StoreDeps {
    pub catalog_source: Arc<dyn CatalogSourcePort>,
    pub selection: Arc<dyn SelectionStrategyPort>,
    pub latency: Arc<dyn LatencyPort>,
    pub events: Arc<dyn StoreEventPort>,
}

use crate::book::Book;

use super::CatalogSourceError;

/// Read-only provider of the initial book records.
/// 初始书目数据来源（只读）
#[async_trait::async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn load_books(&self) -> Result<Vec<Book>, CatalogSourceError>;
}

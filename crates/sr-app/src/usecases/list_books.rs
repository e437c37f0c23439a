use anyhow::Result;
use std::sync::Arc;

use sr_core::Book;

use crate::BookStore;

pub const DEFAULT_PAGE_LIMIT: usize = 20;
const MAX_PAGE_LIMIT: usize = 100;

/// 分页列出书目的用例
/// Use case for paging through the catalog in dataset order
pub struct ListBooks {
    store: Arc<BookStore>,
    max_limit: usize,
}

impl ListBooks {
    pub fn from_arc(store: Arc<BookStore>) -> Self {
        Self {
            store,
            max_limit: MAX_PAGE_LIMIT,
        }
    }

    /// Returns page `page` (1-based) of at most `limit` books.
    ///
    /// Pages past the end are empty, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0, or `limit` is 0 or above the maximum.
    pub async fn execute(&self, page: usize, limit: usize) -> Result<Vec<Book>> {
        if page == 0 {
            return Err(anyhow::anyhow!("Invalid page: {}. Pages start at 1", page));
        }

        if limit == 0 {
            return Err(anyhow::anyhow!(
                "Invalid limit: {}. Must be at least 1",
                limit
            ));
        }

        if limit > self.max_limit {
            return Err(anyhow::anyhow!(
                "Invalid limit: {}. Must be at most {}",
                limit,
                self.max_limit
            ));
        }

        let books = self.store.books().await;
        let start = (page - 1).saturating_mul(limit);
        Ok(books.into_iter().skip(start).take(limit).collect())
    }
}

use anyhow::Result;
use std::sync::Arc;

use sr_core::Book;
use tracing::debug;

use crate::BookStore;

/// Case-insensitive search over title, author and genre.
pub struct SearchBooks {
    store: Arc<BookStore>,
}

impl SearchBooks {
    pub fn from_arc(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// Blank terms match nothing.
    pub async fn execute(&self, term: &str) -> Result<Vec<Book>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let matches: Vec<Book> = self
            .store
            .books()
            .await
            .into_iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book.genre.to_lowercase().contains(&needle)
            })
            .collect();
        debug!(term = %needle, hits = matches.len(), "search");
        Ok(matches)
    }
}

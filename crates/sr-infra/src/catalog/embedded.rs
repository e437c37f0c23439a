use sr_core::ports::{CatalogSourceError, CatalogSourcePort};
use sr_core::Book;
use tracing::debug;

use super::parse_books;

const REFERENCE_BOOKS: &str = include_str!("../../assets/books.json");

/// The fifteen-book reference dataset compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalogSource;

impl EmbeddedCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CatalogSourcePort for EmbeddedCatalogSource {
    async fn load_books(&self) -> Result<Vec<Book>, CatalogSourceError> {
        let books = parse_books(REFERENCE_BOOKS)?;
        debug!(count = books.len(), "loaded embedded catalog");
        Ok(books)
    }
}

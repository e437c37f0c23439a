use serde::Serialize;

use super::Algorithm;
use crate::book::{Book, BookId};

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Books recommended for one `(book_id, algorithm)` request.
///
/// Never contains the reference book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub book_id: BookId,
    pub algorithm: Algorithm,
    pub books: Vec<Book>,
}

impl RecommendationSet {
    /// Builds a set from raw strategy output, dropping the reference book,
    /// repeated ids and anything past `limit`.
    pub fn from_selection(
        book_id: BookId,
        algorithm: Algorithm,
        selected: Vec<Book>,
        limit: usize,
    ) -> Self {
        let mut books: Vec<Book> = Vec::with_capacity(limit.min(selected.len()));
        for book in selected {
            if books.len() == limit {
                break;
            }
            if book.id == book_id || books.iter().any(|kept| kept.id == book.id) {
                continue;
            }
            books.push(book);
        }
        Self {
            book_id,
            algorithm,
            books,
        }
    }

    pub fn ids(&self) -> Vec<BookId> {
        self.books.iter().map(|book| book.id).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

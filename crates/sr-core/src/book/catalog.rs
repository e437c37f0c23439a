use std::collections::HashMap;

use super::{Book, BookId};

/// Reasons a dataset cannot become a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate book id {0} in dataset")]
    DuplicateId(BookId),

    #[error("book id must be positive, got {0}")]
    InvalidId(BookId),
}

/// The loaded set of books, read-only for the rest of the session.
///
/// Keeps dataset order for listing and an id index for lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<BookId, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting datasets that break id uniqueness.
    pub fn from_books(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if book.id.get() == 0 {
                return Err(CatalogError::InvalidId(book.id));
            }
            if index.insert(book.id, position).is_some() {
                return Err(CatalogError::DuplicateId(book.id));
            }
        }
        Ok(Self { books, index })
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.index.get(&id).map(|&position| &self.books[position])
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::{book, books};

    #[test]
    fn from_books_indexes_every_record() {
        let catalog = Catalog::from_books(books(1..=15)).unwrap();

        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.get(BookId::new(7)).unwrap().title, "Title 7");
        assert!(catalog.contains(BookId::new(15)));
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = Catalog::from_books(books(1..=3)).unwrap();
        assert!(catalog.get(BookId::new(999)).is_none());
    }

    #[test]
    fn from_books_rejects_duplicate_ids() {
        let result = Catalog::from_books(vec![book(1), book(2), book(1)]);
        assert_eq!(result, Err(CatalogError::DuplicateId(BookId::new(1))));
    }

    #[test]
    fn from_books_rejects_zero_id() {
        let result = Catalog::from_books(vec![book(0)]);
        assert_eq!(result, Err(CatalogError::InvalidId(BookId::new(0))));
    }

    #[test]
    fn books_preserves_dataset_order() {
        let catalog = Catalog::from_books(vec![book(3), book(1), book(2)]).unwrap();
        let ids: Vec<u32> = catalog.books().iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

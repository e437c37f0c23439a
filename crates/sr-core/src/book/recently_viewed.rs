use serde::Serialize;

use super::Book;

pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Most-recent-first history of opened books.
///
/// Holds at most `capacity` entries and never the same id twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentlyViewed {
    entries: Vec<Book>,
    #[serde(skip)]
    capacity: usize,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// `capacity` bounds the history; nothing is allocated up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Moves `book` to the front, dropping an earlier entry with the same id
    /// and evicting the oldest entry past capacity.
    pub fn record(&mut self, book: Book) {
        self.entries.retain(|existing| existing.id != book.id);
        self.entries.insert(0, book);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[Book] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentlyViewed {
    fn default() -> Self {
        Self::new()
    }
}

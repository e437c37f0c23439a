use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::book::Book;

/// Summary statistics over a set of books.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total_books: usize,
    pub average_rating: f64,
    pub genres: BTreeMap<String, usize>,
    pub years_range: (i32, i32),
    pub publishers: usize,
    pub authors: usize,
}

impl DatasetStats {
    /// Returns `None` for an empty dataset, where averages are undefined.
    pub fn from_books(books: &[Book]) -> Option<Self> {
        let first = books.first()?;

        let mut genres = BTreeMap::new();
        let mut publishers = BTreeSet::new();
        let mut authors = BTreeSet::new();
        let mut rating_sum = 0.0;
        let (mut year_min, mut year_max) = (first.year, first.year);

        for book in books {
            *genres.entry(book.genre.clone()).or_insert(0) += 1;
            publishers.insert(book.publisher.as_str());
            authors.insert(book.author.as_str());
            rating_sum += book.rating;
            year_min = year_min.min(book.year);
            year_max = year_max.max(book.year);
        }

        Some(Self {
            total_books: books.len(),
            average_rating: rating_sum / books.len() as f64,
            genres,
            years_range: (year_min, year_max),
            publishers: publishers.len(),
            authors: authors.len(),
        })
    }
}

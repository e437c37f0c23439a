use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::book::{Book, BookId};
use crate::ports::{SelectionError, SelectionStrategyPort};
use crate::recommendation::Algorithm;

const MAGNITUDE_EPSILON: f64 = 1e-12;

/// How two feature vectors are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMetric {
    /// Highest cosine similarity first.
    Cosine,
    /// Smallest euclidean distance first (nearest neighbours).
    Euclidean,
}

/// Content features derived from the candidate set.
///
/// Layout: one-hot genre, one-hot publisher, min-max scaled year,
/// rating scaled from the 1..5 range.
#[derive(Debug, Clone)]
pub struct FeatureSpace {
    genres: Vec<String>,
    publishers: Vec<String>,
    year_min: i32,
    year_max: i32,
}

impl FeatureSpace {
    pub fn fit(books: &[Book]) -> Self {
        let genres: BTreeSet<&str> = books.iter().map(|b| b.genre.as_str()).collect();
        let publishers: BTreeSet<&str> = books.iter().map(|b| b.publisher.as_str()).collect();
        let year_min = books.iter().map(|b| b.year).min().unwrap_or(0);
        let year_max = books.iter().map(|b| b.year).max().unwrap_or(0);
        Self {
            genres: genres.into_iter().map(str::to_string).collect(),
            publishers: publishers.into_iter().map(str::to_string).collect(),
            year_min,
            year_max,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.genres.len() + self.publishers.len() + 2
    }

    pub fn vectorize(&self, book: &Book) -> Vec<f64> {
        let mut features = Vec::with_capacity(self.dimensions());
        features.extend(self.genres.iter().map(|g| one_hot(g == &book.genre)));
        features.extend(self.publishers.iter().map(|p| one_hot(p == &book.publisher)));

        // In f64: the i32 difference overflows for extreme dataset years.
        let span = f64::from(self.year_max) - f64::from(self.year_min);
        let year = if span > 0.0 {
            (f64::from(book.year) - f64::from(self.year_min)) / span
        } else {
            0.0
        };
        features.push(year);
        features.push((book.rating - 1.0) / 4.0);
        features
    }
}

fn one_hot(hit: bool) -> f64 {
    if hit {
        1.0
    } else {
        0.0
    }
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a < MAGNITUDE_EPSILON || norm_b < MAGNITUDE_EPSILON {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Content-based ranking over genre, publisher, year and rating.
///
/// Deterministic: ties are broken by ascending id.
#[derive(Debug, Clone)]
pub struct ContentSimilarity {
    metric: SimilarityMetric,
}

impl ContentSimilarity {
    pub fn new(metric: SimilarityMetric) -> Self {
        Self { metric }
    }

    pub fn cosine() -> Self {
        Self::new(SimilarityMetric::Cosine)
    }

    pub fn nearest_neighbors() -> Self {
        Self::new(SimilarityMetric::Euclidean)
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }
}

impl SelectionStrategyPort for ContentSimilarity {
    fn select(
        &self,
        candidates: &[Book],
        exclude: BookId,
        count: usize,
        _algorithm: Algorithm,
    ) -> Result<Vec<Book>, SelectionError> {
        let reference = candidates
            .iter()
            .find(|book| book.id == exclude)
            .ok_or(SelectionError::ReferenceMissing(exclude))?;

        let space = FeatureSpace::fit(candidates);
        let target = space.vectorize(reference);

        let mut scored: Vec<(f64, &Book)> = candidates
            .iter()
            .filter(|book| book.id != exclude)
            .map(|book| {
                let features = space.vectorize(book);
                let score = match self.metric {
                    SimilarityMetric::Cosine => cosine_similarity(&target, &features),
                    SimilarityMetric::Euclidean => euclidean_distance(&target, &features),
                };
                (score, book)
            })
            .collect();

        let metric = self.metric;
        scored.sort_by(|(score_a, book_a), (score_b, book_b)| {
            let by_score = match metric {
                SimilarityMetric::Cosine => score_b.total_cmp(score_a),
                SimilarityMetric::Euclidean => score_a.total_cmp(score_b),
            };
            match by_score {
                Ordering::Equal => book_a.id.cmp(&book_b.id),
                other => other,
            }
        });

        tracing::debug!(
            reference = %exclude,
            metric = ?metric,
            dimensions = space.dimensions(),
            "ranked {} candidates",
            scored.len()
        );

        Ok(scored
            .into_iter()
            .take(count)
            .map(|(_, book)| book.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::book;

    fn shelf() -> Vec<Book> {
        let mut odyssey = book(1);
        odyssey.genre = "Epic Poetry".into();
        odyssey.publisher = "Ancient Greece".into();
        odyssey.year = -800;
        odyssey.rating = 4.5;

        let mut hobbit = book(2);
        hobbit.genre = "Fantasy".into();
        hobbit.publisher = "Allen & Unwin".into();
        hobbit.year = 1937;
        hobbit.rating = 4.7;

        let mut lotr = book(3);
        lotr.genre = "Fantasy".into();
        lotr.publisher = "Allen & Unwin".into();
        lotr.year = 1954;
        lotr.rating = 4.9;

        let mut gatsby = book(4);
        gatsby.genre = "Fiction".into();
        gatsby.publisher = "Charles Scribner's Sons".into();
        gatsby.year = 1925;
        gatsby.rating = 4.3;

        vec![odyssey, hobbit, lotr, gatsby]
    }

    #[test]
    fn extreme_years_scale_without_overflow() {
        let mut ancient = book(1);
        ancient.year = i32::MIN;
        let mut future = book(2);
        future.year = i32::MAX;
        let space = FeatureSpace::fit(&[ancient.clone(), future.clone()]);

        let year_of = |b: &Book| space.vectorize(b)[space.dimensions() - 2];

        assert_eq!(year_of(&ancient), 0.0);
        assert_eq!(year_of(&future), 1.0);
    }

    fn ids(books: &[Book]) -> Vec<u32> {
        books.iter().map(|b| b.id.get()).collect()
    }

    #[test]
    fn feature_space_layout_matches_dimensions() {
        let books = shelf();
        let space = FeatureSpace::fit(&books);
        // 3 genres + 3 publishers + year + rating
        assert_eq!(space.dimensions(), 8);
        assert_eq!(space.vectorize(&books[0]).len(), 8);
    }

    #[test]
    fn year_and_rating_are_normalised() {
        let books = shelf();
        let space = FeatureSpace::fit(&books);

        let oldest = space.vectorize(&books[0]);
        let newest = space.vectorize(&books[2]);

        assert_eq!(oldest[6], 0.0);
        assert_eq!(newest[6], 1.0);
        assert!((oldest[7] - 0.875).abs() < 1e-9);
    }

    #[test]
    fn cosine_ranks_same_genre_and_publisher_first() {
        let selected = ContentSimilarity::cosine()
            .select(&shelf(), BookId::new(2), 2, Algorithm::Cosine)
            .unwrap();
        assert_eq!(ids(&selected)[0], 3);
    }

    #[test]
    fn nearest_neighbors_ranks_closest_first() {
        let selected = ContentSimilarity::nearest_neighbors()
            .select(&shelf(), BookId::new(3), 3, Algorithm::Knn)
            .unwrap();
        assert_eq!(ids(&selected)[0], 2);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn never_returns_reference_book() {
        for metric in [SimilarityMetric::Cosine, SimilarityMetric::Euclidean] {
            let selected = ContentSimilarity::new(metric)
                .select(&shelf(), BookId::new(4), 10, Algorithm::Cosine)
                .unwrap();
            assert!(!ids(&selected).contains(&4));
            assert_eq!(selected.len(), 3);
        }
    }

    #[test]
    fn missing_reference_is_an_error() {
        let err = ContentSimilarity::cosine()
            .select(&shelf(), BookId::new(99), 5, Algorithm::Cosine)
            .unwrap_err();
        assert!(matches!(err, SelectionError::ReferenceMissing(id) if id == BookId::new(99)));
    }

    #[test]
    fn identical_books_tie_break_by_id() {
        let books = vec![book(5), book(3), book(4)];
        let mut books = books;
        for b in books.iter_mut() {
            b.publisher = "Same".into();
            b.year = 2000;
        }
        let selected = ContentSimilarity::cosine()
            .select(&books, BookId::new(5), 2, Algorithm::Cosine)
            .unwrap();
        assert_eq!(ids(&selected), vec![3, 4]);
    }

    #[test]
    fn zero_vectors_have_zero_similarity() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}

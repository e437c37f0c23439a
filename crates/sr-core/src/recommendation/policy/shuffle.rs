use std::sync::Arc;

use crate::book::{Book, BookId};
use crate::ports::{RandomSourcePort, SelectionError, SelectionStrategyPort};
use crate::recommendation::Algorithm;

/// Fisher-Yates shuffle driven by `random`.
pub fn shuffle_in_place<T>(items: &mut [T], random: &dyn RandomSourcePort) {
    for i in (1..items.len()).rev() {
        // Clamp so a misbehaving source cannot index out of bounds.
        let j = random.next_below(i + 1).min(i);
        items.swap(i, j);
    }
}

/// Uniform random sample of the catalog, ignoring the algorithm.
///
/// Output order is random by contract; pin it with a seeded source.
pub struct ShuffleSelection {
    random: Arc<dyn RandomSourcePort>,
}

impl ShuffleSelection {
    pub fn new(random: Arc<dyn RandomSourcePort>) -> Self {
        Self { random }
    }
}

impl SelectionStrategyPort for ShuffleSelection {
    fn select(
        &self,
        candidates: &[Book],
        exclude: BookId,
        count: usize,
        _algorithm: Algorithm,
    ) -> Result<Vec<Book>, SelectionError> {
        let mut pool: Vec<Book> = candidates
            .iter()
            .filter(|book| book.id != exclude)
            .cloned()
            .collect();
        shuffle_in_place(&mut pool, self.random.as_ref());
        pool.truncate(count);
        Ok(pool)
    }
}

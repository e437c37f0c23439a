use crate::book::{Book, BookId};
use crate::recommendation::Algorithm;

use super::SelectionError;

/// Picks up to `count` books out of `candidates` for a reference book.
///
/// Implementations must not return `exclude`. The store enforces this again
/// when it builds the result set.
pub trait SelectionStrategyPort: Send + Sync {
    fn select(
        &self,
        candidates: &[Book],
        exclude: BookId,
        count: usize,
        algorithm: Algorithm,
    ) -> Result<Vec<Book>, SelectionError>;
}

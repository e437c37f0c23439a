//! Mock implementations of ports for testing.
//!
//! This module provides mock implementations using `mockall` for unit testing
//! policies and state handling without requiring real infrastructure.

use mockall::mock;

use crate::book::{Book, BookId};
use crate::ports::{RandomSourcePort, SelectionError, SelectionStrategyPort};
use crate::recommendation::Algorithm;

/// Mock implementation of [`RandomSourcePort`].
///
/// Use this to pin the sequence a shuffle consumes.
mock! {
    pub RandomSource {}

    impl RandomSourcePort for RandomSource {
        fn next_below(&self, upper: usize) -> usize;
    }
}

mock! {
    pub SelectionStrategy {}

    impl SelectionStrategyPort for SelectionStrategy {
        fn select(
            &self,
            candidates: &[Book],
            exclude: BookId,
            count: usize,
            algorithm: Algorithm,
        ) -> Result<Vec<Book>, SelectionError>;
    }
}

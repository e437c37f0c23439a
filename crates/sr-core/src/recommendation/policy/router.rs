use std::collections::HashMap;
use std::sync::Arc;

use crate::book::{Book, BookId};
use crate::ports::{SelectionError, SelectionStrategyPort};
use crate::recommendation::Algorithm;

/// Dispatches each algorithm to its own strategy, falling back to a default.
///
/// With no routes registered every algorithm shares the fallback, which is
/// how the simulated demo behaves.
pub struct AlgorithmRouter {
    routes: HashMap<Algorithm, Arc<dyn SelectionStrategyPort>>,
    fallback: Arc<dyn SelectionStrategyPort>,
}

impl AlgorithmRouter {
    pub fn new(fallback: Arc<dyn SelectionStrategyPort>) -> Self {
        Self {
            routes: HashMap::new(),
            fallback,
        }
    }

    pub fn with_route(
        mut self,
        algorithm: Algorithm,
        strategy: Arc<dyn SelectionStrategyPort>,
    ) -> Self {
        self.routes.insert(algorithm, strategy);
        self
    }

    pub fn has_route(&self, algorithm: Algorithm) -> bool {
        self.routes.contains_key(&algorithm)
    }

    fn strategy_for(&self, algorithm: Algorithm) -> &Arc<dyn SelectionStrategyPort> {
        self.routes.get(&algorithm).unwrap_or(&self.fallback)
    }
}

impl SelectionStrategyPort for AlgorithmRouter {
    fn select(
        &self,
        candidates: &[Book],
        exclude: BookId,
        count: usize,
        algorithm: Algorithm,
    ) -> Result<Vec<Book>, SelectionError> {
        self.strategy_for(algorithm)
            .select(candidates, exclude, count, algorithm)
    }
}

/// Source of uniform random indices.
pub trait RandomSourcePort: Send + Sync {
    /// Returns a value in `0..upper`. `upper` is never zero.
    fn next_below(&self, upper: usize) -> usize;
}

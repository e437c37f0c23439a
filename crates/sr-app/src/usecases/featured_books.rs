use anyhow::Result;
use std::sync::Arc;

use sr_core::ports::RandomSourcePort;
use sr_core::recommendation::policy::shuffle_in_place;
use sr_core::Book;

use crate::BookStore;

/// Highly rated books qualify for the home page.
pub const FEATURED_MIN_RATING: f64 = 4.0;

/// Random sample of highly rated books for the home page.
pub struct FeaturedBooks {
    store: Arc<BookStore>,
    random: Arc<dyn RandomSourcePort>,
}

impl FeaturedBooks {
    pub fn new(store: Arc<BookStore>, random: Arc<dyn RandomSourcePort>) -> Self {
        Self { store, random }
    }

    /// Up to `count` books rated at least [`FEATURED_MIN_RATING`].
    pub async fn execute(&self, count: usize) -> Result<Vec<Book>> {
        let mut pool: Vec<Book> = self
            .store
            .books()
            .await
            .into_iter()
            .filter(|book| book.rating >= FEATURED_MIN_RATING)
            .collect();
        shuffle_in_place(&mut pool, self.random.as_ref());
        pool.truncate(count);
        Ok(pool)
    }
}

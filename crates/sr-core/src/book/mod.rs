//! Book domain: records, the loaded catalog and the view history.

mod catalog;
mod recently_viewed;

pub use catalog::{Catalog, CatalogError};
pub use recently_viewed::{RecentlyViewed, DEFAULT_HISTORY_CAPACITY};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a book within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable book record, loaded once at startup.
///
/// `year` may be negative for works that predate the common era.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub publisher: String,
    pub image_url: String,
    pub rating: f64,
    pub genre: String,
    pub description: String,
}

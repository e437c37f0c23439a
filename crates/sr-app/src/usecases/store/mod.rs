//! Catalog and recommendation store.

mod book_store;
mod context;

pub use book_store::{BookStore, CatalogOutcome, RecommendationOutcome, StoreConfig};
pub use context::{StoreContext, StoreState};

//! SmartReads application layer
//!
//! The catalog and recommendation store plus the read-side use cases built
//! on top of it.

pub mod deps;
pub mod usecases;

pub use deps::StoreDeps;
pub use usecases::store::{
    BookStore, CatalogOutcome, RecommendationOutcome, StoreConfig,
};

//! # sr-core
//!
//! Core domain models and business logic for SmartReads.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod book;
pub mod config;
pub mod insights;
pub mod ports;
pub mod recommendation;
pub mod store;

// Re-export commonly used types at the crate root
pub use book::{Book, BookId, Catalog, CatalogError, RecentlyViewed};
pub use config::AppConfig;
pub use recommendation::{Algorithm, RecommendationSet, UnknownAlgorithm};
pub use store::{CatalogStatus, RequestStatus, StoreChange, StoreError, StoreSnapshot};

//! # sr-infra
//!
//! Adapters for the ports declared in `sr_core::ports`: catalog sources,
//! randomness, simulated latency and change notification.

pub mod catalog;
pub mod events;
pub mod random;
pub mod time;

pub use catalog::{EmbeddedCatalogSource, JsonFileCatalogSource};
pub use events::{StoreUpdate, WatchStoreEvents};
pub use random::{SeededRandomSource, ThreadRandomSource};
pub use time::TokioLatency;

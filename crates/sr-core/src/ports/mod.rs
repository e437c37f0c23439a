//! Port interfaces for the application layer
//!
//! Ports define the contract between the store (application layer) and its
//! collaborators: where books come from, how randomness and latency are
//! produced, how results are selected and how views are notified.
//! Infrastructure adapters live in `sr-infra`.

mod catalog_source;
pub mod errors;
mod latency;
mod random_source;
mod selection_strategy;
mod store_event;

#[cfg(test)]
pub(crate) mod tests;

pub use catalog_source::CatalogSourcePort;
pub use errors::{CatalogSourceError, SelectionError};
pub use latency::{LatencyKind, LatencyPort};
pub use random_source::RandomSourcePort;
pub use selection_strategy::SelectionStrategyPort;
pub use store_event::StoreEventPort;

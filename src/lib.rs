//! SmartReads: book catalog and recommendation store.
//!
//! The library side of the binary: configuration, tracing and wiring live in
//! [`bootstrap`].

pub mod bootstrap;

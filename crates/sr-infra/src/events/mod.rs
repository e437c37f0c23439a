mod watch;

pub use watch::{StoreUpdate, WatchStoreEvents};

use sr_core::ports::StoreEventPort;
use sr_core::{StoreChange, StoreSnapshot};
use tokio::sync::watch;
use tracing::debug;

/// Latest change together with the state it produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreUpdate {
    /// `None` until the first change is emitted.
    pub change: Option<StoreChange>,
    pub snapshot: StoreSnapshot,
}

/// Publishes store changes on a `tokio::sync::watch` channel.
///
/// Subscribers only ever see the most recent update; intermediate ones may
/// be skipped, which is fine for views that re-render from the snapshot.
#[derive(Debug)]
pub struct WatchStoreEvents {
    tx: watch::Sender<StoreUpdate>,
}

impl WatchStoreEvents {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreUpdate::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreUpdate> {
        self.tx.subscribe()
    }

    pub fn latest(&self) -> StoreUpdate {
        self.tx.borrow().clone()
    }
}

impl Default for WatchStoreEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StoreEventPort for WatchStoreEvents {
    async fn emit_store_changed(&self, change: StoreChange, snapshot: StoreSnapshot) {
        debug!(?change, receivers = self.tx.receiver_count(), "store changed");
        // send_replace keeps the value even when nobody is subscribed yet.
        self.tx.send_replace(StoreUpdate {
            change: Some(change),
            snapshot,
        });
    }
}

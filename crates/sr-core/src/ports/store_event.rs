use crate::store::{StoreChange, StoreSnapshot};

/// Change notifications for views.
///
/// Called while the store holds its state lock, so implementations must not
/// call back into the store. / 持锁期间调用，实现中禁止回调 store。
#[async_trait::async_trait]
pub trait StoreEventPort: Send + Sync {
    async fn emit_store_changed(&self, change: StoreChange, snapshot: StoreSnapshot);
}

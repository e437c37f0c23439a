//! Store domain: status state machines, the error taxonomy and the
//! snapshot handed to views.

mod error;
mod snapshot;
mod state_machine;

pub use error::StoreError;
pub use snapshot::{StoreChange, StoreSnapshot};
pub use state_machine::{
    CatalogEvent, CatalogStateMachine, CatalogStatus, RequestEvent, RequestStateMachine,
    RequestStatus,
};

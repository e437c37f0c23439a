//! Store status state machines.
//!
//! Pure transition functions for the catalog load and for recommendation
//! requests. Unknown `(state, event)` pairs leave the state unchanged.

use serde::Serialize;

/// Lifecycle of the catalog.
/// 目录加载状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    /// 尚未加载，或加载被取消。
    #[default]
    Uninitialized,
    Loading,
    /// 已加载，之后只读。
    Ready,
    /// 加载失败，可重试。
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    LoadStarted,
    LoadSucceeded,
    LoadFailed,
    /// Every in-flight load was dropped before it settled.
    LoadCancelled,
}

/// Lifecycle of the current recommendation request.
/// 推荐请求状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    Started,
    Completed,
    Failed,
    /// Every in-flight request was dropped; `has_results` says whether an
    /// earlier set is still on display.
    Cancelled { has_results: bool },
}

pub struct CatalogStateMachine;

impl CatalogStateMachine {
    pub fn transition(state: CatalogStatus, event: CatalogEvent) -> CatalogStatus {
        match (state, event) {
            // Loading -> Loading restarts a load whose previous attempt was
            // superseded or cancelled.
            (
                CatalogStatus::Uninitialized | CatalogStatus::Errored | CatalogStatus::Loading,
                CatalogEvent::LoadStarted,
            ) => CatalogStatus::Loading,
            (CatalogStatus::Loading, CatalogEvent::LoadSucceeded) => CatalogStatus::Ready,
            (CatalogStatus::Loading, CatalogEvent::LoadFailed) => CatalogStatus::Errored,
            (CatalogStatus::Loading, CatalogEvent::LoadCancelled) => CatalogStatus::Uninitialized,
            (state, _event) => state,
        }
    }
}

pub struct RequestStateMachine;

impl RequestStateMachine {
    pub fn transition(state: RequestStatus, event: RequestEvent) -> RequestStatus {
        match (state, event) {
            (_, RequestEvent::Started) => RequestStatus::Loading,
            (RequestStatus::Loading, RequestEvent::Completed) => RequestStatus::Ready,
            (RequestStatus::Loading, RequestEvent::Failed) => RequestStatus::Errored,
            (RequestStatus::Loading, RequestEvent::Cancelled { has_results: true }) => {
                RequestStatus::Ready
            }
            (RequestStatus::Loading, RequestEvent::Cancelled { has_results: false }) => {
                RequestStatus::Idle
            }
            (state, _event) => state,
        }
    }
}

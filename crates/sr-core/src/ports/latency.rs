/// Which simulated round trip is being waited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyKind {
    CatalogLoad,
    Recommendation,
}

/// Simulated backend latency.
#[async_trait::async_trait]
pub trait LatencyPort: Send + Sync {
    async fn wait(&self, kind: LatencyKind);
}

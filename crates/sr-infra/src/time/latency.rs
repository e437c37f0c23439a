use sr_core::ports::{LatencyKind, LatencyPort};
use tokio::time::{sleep, Duration};
use tracing::trace;

/// Simulated backend round trips on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioLatency {
    catalog: Duration,
    recommendation: Duration,
}

impl TokioLatency {
    pub fn new(catalog: Duration, recommendation: Duration) -> Self {
        Self {
            catalog,
            recommendation,
        }
    }

    pub fn from_millis(catalog_ms: u64, recommendation_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(catalog_ms),
            Duration::from_millis(recommendation_ms),
        )
    }

    /// 1000 ms for the catalog, 1500 ms per recommendation request.
    pub fn reference() -> Self {
        Self::from_millis(1000, 1500)
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn duration_for(&self, kind: LatencyKind) -> Duration {
        match kind {
            LatencyKind::CatalogLoad => self.catalog,
            LatencyKind::Recommendation => self.recommendation,
        }
    }
}

#[async_trait::async_trait]
impl LatencyPort for TokioLatency {
    async fn wait(&self, kind: LatencyKind) {
        let delay = self.duration_for(kind);
        if delay.is_zero() {
            return;
        }
        trace!(?kind, delay_ms = delay.as_millis() as u64, "simulating latency");
        sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_for_configured_duration() {
        let latency = TokioLatency::reference();

        let start = Instant::now();
        latency.wait(LatencyKind::Recommendation).await;
        assert_eq!(start.elapsed(), Duration::from_millis(1500));

        let start = Instant::now();
        latency.wait(LatencyKind::CatalogLoad).await;
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_latency_returns_immediately() {
        let start = Instant::now();
        TokioLatency::none().wait(LatencyKind::CatalogLoad).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

mod latency;

pub use latency::TokioLatency;

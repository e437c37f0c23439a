pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_or_default, resolve_config_path, CONFIG_ENV_VAR};
pub use run::{run_demo, DemoReport, DemoRequest};
pub use wiring::{wire_store, RecommendationMode, WiredStore, WiringError};

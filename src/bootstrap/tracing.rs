//! Tracing configuration for SmartReads
//!
//! ## Architecture / 架构
//!
//! Structured logging through `tracing-subscriber`: an env filter with
//! sensible defaults (overridable via `RUST_LOG`) and a single fmt layer on
//! stderr, so stdout stays free for the JSON report.
//! stdout 只输出 JSON 报告，日志全部写到 stderr。

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// - **Development**: debug for the workspace crates, info elsewhere
/// - **Production**: info for the workspace crates, warn elsewhere
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![if is_dev { "info" } else { "warn" }.to_string()];
    directives.extend(
        ["smartreads", "smartreads_lib", "sr_core", "sr_app", "sr_infra"]
            .iter()
            .map(|target| format!("{target}={crate_level}")),
    );
    directives
}

/// Initialize the global tracing subscriber.
///
/// ## Call this / 调用位置
///
/// Once from `main`, before anything logs. / 在 `main` 中尽早调用一次。
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}

//! Structured logging for queueing simulation runs
//!
//! # Controlling output
//!
//! ```rust,no_run
//! use queuesim_core::logging::init_simulation_logging_with_level;
//! init_simulation_logging_with_level("debug");
//! ```
//!
//! `RUST_LOG` overrides the level argument when set, e.g.
//! `RUST_LOG=queuesim_components::station=trace` to see every event.
//!
//! Level guidelines:
//! - TRACE: individual events and state transitions (very verbose)
//! - DEBUG: per-replication setup and validation
//! - INFO: run and sweep progress
//! - WARN: unusual but recoverable conditions

use tracing::{info, Span};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging at INFO with sensible per-crate defaults.
pub fn init_simulation_logging() {
    init_simulation_logging_with_level("info")
}

/// Initialize logging at `level` ("trace", "debug", "info", "warn" or "error").
///
/// Calling this more than once is harmless; only the first subscriber is kept.
pub fn init_simulation_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("queuesim_core={level},queuesim_components={level},queuesim_metrics={level},queuesim={level}")
            .into()
    });

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!("Simulation logging initialized at level: {}", level);
    }
}

/// Trace-level, pretty-printed logging for debugging a single run.
pub fn init_detailed_simulation_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "queuesim_core=trace,queuesim_components=trace,queuesim_metrics=debug".into()
    });

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .pretty(),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!("Detailed simulation logging initialized");
    }
}

/// Span wrapping one replication.
pub fn replication_span(index: usize, seed: u64) -> Span {
    tracing::info_span!("replication", index, seed)
}

/// Span wrapping one point of an arrival-rate sweep.
pub fn sweep_point_span(lambda: f64) -> Span {
    tracing::info_span!("sweep_point", lambda)
}

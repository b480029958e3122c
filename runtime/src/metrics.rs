//! Metrics for store observability.
//!
//! The store records through the `metrics` facade. Without an installed
//! recorder every call is a no-op; [`install_prometheus_recorder`] installs a
//! Prometheus recorder whose handle renders the text exposition format.
//!
//! # Example
//!
//! ```rust,no_run
//! use expensify_runtime::metrics::install_prometheus_recorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handle = install_prometheus_recorder()?;
//! // ... dispatch some actions ...
//! println!("{}", handle.render());
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

/// Actions dispatched, labelled by store name
pub const ACTIONS_TOTAL: &str = "store.actions.total";
/// Time spent inside the reducer per dispatch
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";
/// Listener invocations
pub const LISTENERS_NOTIFIED: &str = "store.listeners.notified";
/// Currently registered listeners
pub const LISTENERS: &str = "store.listeners";
/// Dispatches rejected because a reducer was running
pub const REENTRANT_DISPATCH_REJECTED: &str = "store.reentrant_dispatch.rejected";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Register descriptions for every store metric.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions dispatched");
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time spent computing the next state in seconds"
    );
    describe_counter!(
        LISTENERS_NOTIFIED,
        "Total number of listener invocations after dispatch"
    );
    describe_gauge!(LISTENERS, "Number of listeners currently subscribed");
    describe_counter!(
        REENTRANT_DISPATCH_REJECTED,
        "Dispatches rejected because they were issued from inside a reducer"
    );
}

/// Install a process-wide Prometheus recorder and describe the store metrics.
///
/// # Errors
///
/// Returns [`MetricsError::Build`] if the histogram buckets are rejected and
/// [`MetricsError::Install`] if a recorder is already installed.
pub fn install_prometheus_recorder() -> Result<PrometheusHandle, MetricsError> {
    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            &[
                0.000_001, 0.000_01, 0.000_1, 0.001, 0.005, 0.01, 0.05, 0.1,
            ],
        )
        .map_err(|e| MetricsError::Build(e.to_string()))?;

    let handle = builder
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!("Prometheus metrics recorder installed");

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics_without_recorder() {
        // Describing metrics with no recorder installed is a no-op
        register_metrics();
    }

    #[test]
    fn test_metric_names_share_store_prefix() {
        for name in [
            ACTIONS_TOTAL,
            REDUCER_DURATION_SECONDS,
            LISTENERS_NOTIFIED,
            LISTENERS,
            REENTRANT_DISPATCH_REJECTED,
        ] {
            assert!(name.starts_with("store."), "{name}");
        }
    }
}

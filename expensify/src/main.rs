//! Expensify demo.
//!
//! Replays a short sequence of expense and filter actions against a fresh
//! store and prints the state snapshot after every dispatch.
//!
//! Configure with `EXPENSIFY_OUTPUT`, `EXPENSIFY_STORE_NAME`,
//! `EXPENSIFY_LOG_ACTIONS`, `EXPENSIFY_METRICS` and `RUST_LOG`.

use anyhow::{Context, Result};
use expensify::demo::run_demo_sequence;
use expensify::{DemoConfig, create_store};
use expensify_runtime::metrics::install_prometheus_recorder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only snapshots
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expensify=info,expensify_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DemoConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "Starting Expensify demo");

    let metrics = if config.metrics {
        Some(install_prometheus_recorder().context("Failed to install metrics recorder")?)
    } else {
        None
    };

    let store = create_store(config.store_config());

    let output = config.output;
    let subscription = store.subscribe(move |state| match output.render(state) {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => tracing::error!(error = %error, "Failed to render state"),
    });

    run_demo_sequence(&store)?;

    subscription.unsubscribe();
    tracing::info!(
        expenses = store.state(|state| state.expenses.len()),
        "Demo sequence complete"
    );

    if let Some(handle) = metrics {
        println!("{}", handle.render());
    }

    Ok(())
}

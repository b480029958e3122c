//! Configuration for the demo binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::types::ExpensifyState;
use anyhow::{Context, Result, bail};
use expensify_runtime::StoreConfig;
use std::env;
use std::str::FromStr;

/// How state snapshots are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Json,
    /// Rust `{:#?}` formatting
    Debug,
}

impl OutputFormat {
    /// Render a state snapshot in this format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(self, state: &ExpensifyState) -> Result<String> {
        match self {
            Self::Pretty => serde_json::to_string_pretty(state).context("Failed to render state"),
            Self::Json => serde_json::to_string(state).context("Failed to render state"),
            Self::Debug => Ok(format!("{state:#?}")),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "debug" => Ok(Self::Debug),
            other => bail!("unknown output format `{other}` (expected pretty, json or debug)"),
        }
    }
}

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Snapshot format (`EXPENSIFY_OUTPUT`, default `pretty`)
    pub output: OutputFormat,
    /// Store name for spans and metrics (`EXPENSIFY_STORE_NAME`, default `expensify`)
    pub store_name: String,
    /// Log every dispatched action at debug level (`EXPENSIFY_LOG_ACTIONS`, default `false`)
    pub log_actions: bool,
    /// Install the Prometheus recorder and print metrics at exit (`EXPENSIFY_METRICS`, default `false`)
    pub metrics: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            store_name: "expensify".to_string(),
            log_actions: false,
            metrics: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output = match lookup("EXPENSIFY_OUTPUT") {
            Some(value) => value
                .parse::<OutputFormat>()
                .context("Invalid EXPENSIFY_OUTPUT")?,
            None => defaults.output,
        };

        Ok(Self {
            output,
            store_name: lookup("EXPENSIFY_STORE_NAME").unwrap_or(defaults.store_name),
            log_actions: parse_flag(&lookup, "EXPENSIFY_LOG_ACTIONS", defaults.log_actions)?,
            metrics: parse_flag(&lookup, "EXPENSIFY_METRICS", defaults.metrics)?,
        })
    }

    /// Store configuration derived from these settings
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.store_name.clone(), self.log_actions)
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |value| {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => bail!("Invalid {key}: expected a boolean, got `{other}`"),
        }
    })
}

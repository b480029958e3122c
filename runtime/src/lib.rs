//! # Expensify Runtime
//!
//! Runtime implementation for the Expensify state container.
//!
//! This crate provides the [`Store`]: the component that owns the current
//! state, routes dispatched actions through a reducer and notifies
//! subscribers after every change.
//!
//! ## Core Components
//!
//! - **Store**: Holds state snapshots and coordinates reducer execution
//! - **Subscription**: Handle returned by [`Store::subscribe`]
//! - **`StoreConfig`**: Naming and logging knobs for a store instance
//!
//! ## Example
//!
//! ```ignore
//! use expensify_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, ());
//!
//! let subscription = store.subscribe(|state| println!("{state:?}"));
//!
//! // Dispatch returns the action, so generated fields can be read back
//! let action = store.dispatch(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! subscription.unsubscribe();
//! ```

/// Metric names and Prometheus recorder setup
pub mod metrics;

/// The Store runtime
pub mod store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A store operation was attempted from inside a running reducer
        ///
        /// Reducers must not dispatch or swap reducers. The rejected call has
        /// no effect and the state being computed is unaffected.
        #[error("cannot {operation} while a reducer is executing")]
        ReducerExecuting {
            /// The rejected operation (`dispatch`, `replace_reducer`)
            operation: &'static str,
        },
    }
}

pub use error::StoreError;
pub use store::{Store, Subscription};

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use expensify_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_name("expenses")
///     .with_log_actions(true);
///
/// assert_eq!(config.name, "expenses");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name used to label tracing spans and metric series
    pub name: String,
    /// Record every dispatched action (Debug-formatted) at debug level
    pub log_actions: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(name: impl Into<String>, log_actions: bool) -> Self {
        Self {
            name: name.into(),
            log_actions,
        }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable action logging
    #[must_use]
    pub fn with_log_actions(mut self, log_actions: bool) -> Self {
        self.log_actions = log_actions;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store".to_string(),
            log_actions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "store");
        assert!(!config.log_actions);
    }

    #[test]
    fn test_store_config_builder() {
        let config = StoreConfig::default()
            .with_name("expenses")
            .with_log_actions(true);

        assert_eq!(config, StoreConfig::new("expenses", true));
    }

    #[test]
    fn test_store_error_display() {
        let error = StoreError::ReducerExecuting {
            operation: "dispatch",
        };
        assert_eq!(
            error.to_string(),
            "cannot dispatch while a reducer is executing"
        );
    }
}

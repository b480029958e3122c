//! # Expensify Testing
//!
//! Testing utilities and helpers for the Expensify state container.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`RecordingListener`]: captures every snapshot a store hands to a listener
//! - [`init_test_tracing`]: routes `tracing` output through the test harness
//!
//! ## Example
//!
//! ```ignore
//! use expensify_testing::RecordingListener;
//!
//! #[test]
//! fn test_listener_sees_new_state() {
//!     let store = Store::new(State::default(), MyReducer, ());
//!     let recorder = RecordingListener::new();
//!     let _subscription = store.subscribe(recorder.listener());
//!
//!     store.dispatch(Action::Add(1)).unwrap();
//!
//!     assert_eq!(recorder.len(), 1);
//! }
//! ```


/// Mock collaborators for store tests
pub mod mocks {
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Listener double that records every snapshot it receives
    ///
    /// Clones share the same recording, so one clone can be handed to a
    /// store while the test keeps another for assertions.
    ///
    /// # Example
    ///
    /// ```
    /// use expensify_testing::RecordingListener;
    ///
    /// let recorder = RecordingListener::<u32>::new();
    /// let listener = recorder.listener();
    /// listener(&1);
    /// listener(&2);
    /// assert_eq!(recorder.snapshots(), vec![1, 2]);
    /// ```
    #[derive(Debug)]
    pub struct RecordingListener<S> {
        seen: Rc<RefCell<Vec<S>>>,
    }

    impl<S> Clone for RecordingListener<S> {
        fn clone(&self) -> Self {
            Self {
                seen: Rc::clone(&self.seen),
            }
        }
    }

    impl<S> Default for RecordingListener<S> {
        fn default() -> Self {
            Self {
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl<S: Clone + 'static> RecordingListener<S> {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// A listener closure that appends each snapshot to the recording
        #[must_use]
        pub fn listener(&self) -> impl Fn(&S) + 'static + use<S> {
            let seen = Rc::clone(&self.seen);
            move |state: &S| seen.borrow_mut().push(state.clone())
        }

        /// All snapshots received so far, oldest first
        #[must_use]
        pub fn snapshots(&self) -> Vec<S> {
            self.seen.borrow().clone()
        }

        /// The most recent snapshot, if any
        #[must_use]
        pub fn last(&self) -> Option<S> {
            self.seen.borrow().last().cloned()
        }

        /// Number of notifications received
        #[must_use]
        pub fn len(&self) -> usize {
            self.seen.borrow().len()
        }

        /// Whether no notification has been received
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.seen.borrow().is_empty()
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Route `tracing` output through the test harness
    ///
    /// Honors `RUST_LOG`, defaulting to `debug`. Safe to call from every test:
    /// only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::RecordingListener;
pub use reducer_test::ReducerTest;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_listener_shares_recording_between_clones() {
        let recorder = RecordingListener::<String>::new();
        let clone = recorder.clone();
        assert!(recorder.is_empty());

        let listener = clone.listener();
        listener(&"first".to_string());

        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.last().as_deref(), Some("first"));
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}

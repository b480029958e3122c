//! # Expensify Core
//!
//! Core traits for the Expensify state container.
//!
//! This crate provides the reducer abstraction the rest of the workspace is
//! built on. It has no knowledge of expenses: the domain lives in the
//! `expensify` crate, the runtime (`Store`) in `expensify-runtime`.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable domain data
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies (often `()`)
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Reducers never perform I/O
//! - Composition over inheritance: small reducers are scoped and combined
//!
//! ## Example
//!
//! ```
//! use expensify_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Reset => state.count = 0,
//!         }
//!     }
//! }
//!
//! let before = CounterState::default();
//! let after = CounterReducer.reduced(&before, CounterAction::Increment, &());
//! assert_eq!(after.count, 1);
//! assert_eq!(before.count, 0);
//! ```

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for state transitions
///
/// Reducers are deterministic functions: `(State, Action, Environment) → State`.
/// They contain all state-transition logic and are trivially testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// Actions a reducer does not handle must leave the state untouched.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Apply an action to the state in place
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to the state being computed
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);

        /// Compute the next state without touching the current one
        ///
        /// This is the pure form `(state, action) → next state`: the input is
        /// cloned, reduced, and returned. Callers holding `state` keep seeing
        /// the old value.
        fn reduced(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::State
        where
            Self::State: Clone,
        {
            let mut next = state.clone();
            self.reduce(&mut next, action, env);
            next
        }
    }
}

pub use composition::{CombinedReducer, ScopedReducer, combine_reducers, scope_reducer};
pub use reducer::Reducer;

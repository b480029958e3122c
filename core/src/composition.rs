//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! Together they give the keyed composition a root store needs: each feature
//! reducer is scoped to its field of the root state, and the scoped reducers
//! are combined so every dispatched action reaches all of them.
//!
//! # Examples
//!
//! ```
//! use expensify_core::Reducer;
//! use expensify_core::composition::{BoxedReducer, combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Push(i32),
//!     Rename(String),
//! }
//!
//! struct ListReducer;
//! struct NameReducer;
//!
//! impl Reducer for ListReducer {
//!     type State = Vec<i32>;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Vec<i32>, action: AppAction, _env: &()) {
//!         if let AppAction::Push(n) = action {
//!             state.push(n);
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut String, action: AppAction, _env: &()) {
//!         if let AppAction::Rename(name) = action {
//!             *state = name;
//!         }
//!     }
//! }
//!
//! #[derive(Default)]
//! struct AppState {
//!     items: Vec<i32>,
//!     name: String,
//! }
//!
//! fn items(state: &mut AppState) -> &mut Vec<i32> {
//!     &mut state.items
//! }
//!
//! fn name(state: &mut AppState) -> &mut String {
//!     &mut state.name
//! }
//!
//! let reducers: Vec<BoxedReducer<AppState, AppAction, ()>> = vec![
//!     Box::new(scope_reducer(ListReducer, items)),
//!     Box::new(scope_reducer(NameReducer, name)),
//! ];
//! let root = combine_reducers(reducers);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Push(3), &());
//! root.reduce(&mut state, AppAction::Rename("groceries".to_string()), &());
//! assert_eq!(state.items, vec![3]);
//! assert_eq!(state.name, "groceries");
//! ```

use crate::reducer::Reducer;

/// Boxed reducer over a fixed state, action and environment
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E>>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, in the order given, and receives its own
/// clone of the action. Reducers that do not handle an action leave the state
/// untouched, so routing every action to every reducer is safe.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in the combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether the combination holds no reducers at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// `lens` returns the part of the parent state the child reducer owns. The
/// child reducer mutates that field in place; the rest of the parent state is
/// never visible to it.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (a field of `S`)
/// - `A`: The action type
/// - `E`: The environment type
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        lens,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        self.reducer.reduce((self.lens)(state), action, env);
    }
}

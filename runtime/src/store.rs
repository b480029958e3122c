//! The Store - runtime coordinator for a reducer
//!
//! The Store manages:
//! 1. State (as immutable, shared snapshots)
//! 2. Reducer (state transitions)
//! 3. Environment (injected dependencies)
//! 4. Listeners (notified synchronously after every dispatch)
//!
//! A dispatch never mutates a snapshot that has been handed out. The reducer
//! works on a copy of the current state; the copy becomes the new snapshot
//! once the reducer returns.

use crate::metrics::{
    ACTIONS_TOTAL, LISTENERS, LISTENERS_NOTIFIED, REDUCER_DURATION_SECONDS,
    REENTRANT_DISPATCH_REJECTED,
};
use crate::{StoreConfig, StoreError};
use expensify_core::reducer::Reducer;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

/// A registered state listener
type Listener<S> = Rc<dyn Fn(&S)>;

/// Shared store internals
struct Inner<S, E, R> {
    state: RefCell<Rc<S>>,
    reducer: RefCell<R>,
    environment: E,
    listeners: RefCell<Vec<(u64, Listener<S>)>>,
    next_listener_id: Cell<u64>,
    dispatching: Cell<bool>,
    config: StoreConfig,
}

/// Removal side of the listener list, erased so `Subscription` is not generic
trait ListenerRegistry {
    fn remove_listener(&self, id: u64) -> bool;
    fn contains_listener(&self, id: u64) -> bool;
}

impl<S, E, R> ListenerRegistry for Inner<S, E, R> {
    fn contains_listener(&self, id: u64) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    fn remove_listener(&self, id: u64) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = listeners.len() != before;

        if removed {
            // Note: Precision loss acceptable for metrics (listener counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!(LISTENERS, "store" => self.config.name.clone())
                .set(listeners.len() as f64);
            tracing::debug!(
                store = %self.config.name,
                listener_id = id,
                "Listener unsubscribed"
            );
        }

        removed
    }
}

/// Marks the store as running a reducer for as long as the guard lives
///
/// Resets the flag on drop, including while unwinding from a reducer panic.
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// The Store - holds state and routes actions through a reducer
///
/// `Store` is a handle: cloning it is cheap and every clone sees the same
/// state, reducer and listeners. The store is single-threaded (`!Send`).
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(AppState::default(), app_reducer(), ());
///
/// store.dispatch(AppAction::Rename("groceries".into()))?;
/// assert_eq!(store.state(|s| s.name.clone()), "groceries");
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    inner: Rc<Inner<S, E, R>>,
    _action: PhantomData<fn(A)>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            _action: PhantomData,
        }
    }
}

impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.inner.config.name)
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("dispatching", &self.inner.dispatching.get())
            .finish_non_exhaustive()
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + 'static,
    S: Clone + 'static,
    A: Clone + std::fmt::Debug,
    E: 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Uses [`StoreConfig::default`].
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new Store with custom configuration
    #[must_use]
    pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
        tracing::debug!(store = %config.name, "Store created");

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial_state)),
                reducer: RefCell::new(reducer),
                environment,
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
                dispatching: Cell::new(false),
                config,
            }),
            _action: PhantomData,
        }
    }

    /// Dispatch an action to the store
    ///
    /// 1. Copies the current state and runs the reducer on the copy
    /// 2. Commits the copy as the new snapshot
    /// 3. Calls every listener, in subscription order, with the current snapshot
    /// 4. Returns the dispatched action
    ///
    /// Returning the action lets callers read values generated while building
    /// it, such as a fresh id.
    ///
    /// Listeners may dispatch again; the nested dispatch runs to completion
    /// (including its own notification round) before the outer round resumes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReducerExecuting`] if called from inside a
    /// running reducer. Nothing is changed in that case.
    ///
    /// # Panics
    ///
    /// A panicking reducer propagates the panic. The committed state is left
    /// as it was before the dispatch and the store remains usable.
    #[tracing::instrument(skip_all, name = "store_dispatch", fields(store = %self.inner.config.name))]
    pub fn dispatch(&self, action: A) -> Result<A, StoreError> {
        let name = &self.inner.config.name;

        if self.inner.dispatching.get() {
            tracing::warn!("Rejected dispatch issued from inside a reducer");
            metrics::counter!(REENTRANT_DISPATCH_REJECTED, "store" => name.clone()).increment(1);
            return Err(StoreError::ReducerExecuting {
                operation: "dispatch",
            });
        }

        if self.inner.config.log_actions {
            tracing::debug!(?action, "Processing action");
        } else {
            tracing::debug!("Processing action");
        }
        metrics::counter!(ACTIONS_TOTAL, "store" => name.clone()).increment(1);

        let snapshot = {
            let current = self.snapshot();
            let mut next = S::clone(&current);

            let _guard = DispatchGuard::enter(&self.inner.dispatching);
            let start = std::time::Instant::now();
            self.inner
                .reducer
                .borrow()
                .reduce(&mut next, action.clone(), &self.inner.environment);
            metrics::histogram!(REDUCER_DURATION_SECONDS, "store" => name.clone())
                .record(start.elapsed().as_secs_f64());
            tracing::trace!("Reducer completed");

            Rc::new(next)
        };

        *self.inner.state.borrow_mut() = snapshot;
        self.notify();

        Ok(action)
    }

    /// Call every listener registered at the start of the round
    ///
    /// Each listener gets the snapshot current when it is called, so a
    /// listener running after a nested dispatch sees that dispatch's result.
    fn notify(&self) {
        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        tracing::trace!(listeners = listeners.len(), "Notifying listeners");
        for listener in &listeners {
            let current = self.snapshot();
            listener(&current);
        }

        metrics::counter!(LISTENERS_NOTIFIED, "store" => self.inner.config.name.clone())
            .increment(listeners.len() as u64);
    }

    /// Current state snapshot
    ///
    /// The returned snapshot never changes; later dispatches produce new
    /// snapshots instead.
    #[must_use]
    pub fn snapshot(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let expense_count = store.state(|s| s.expenses.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let snapshot = self.snapshot();
        f(&snapshot)
    }

    /// Register a listener called after every successful dispatch
    ///
    /// The listener receives the store's snapshot at the time it is called,
    /// which is the freshly committed one unless an earlier listener
    /// dispatched again. A listener added
    /// while listeners are being notified is first called on the next
    /// dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);

        {
            let listener: Listener<S> = Rc::new(listener);
            let mut listeners = self.inner.listeners.borrow_mut();
            listeners.push((id, listener));

            // Note: Precision loss acceptable for metrics (listener counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!(LISTENERS, "store" => self.inner.config.name.clone())
                .set(listeners.len() as f64);
        }

        tracing::debug!(store = %self.inner.config.name, listener_id = id, "Listener subscribed");

        let registry: Rc<dyn ListenerRegistry> = self.inner.clone();
        Subscription {
            registry: Rc::downgrade(&registry),
            id,
        }
    }

    /// Swap the reducer used by subsequent dispatches
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReducerExecuting`] if called from inside a
    /// running reducer.
    pub fn replace_reducer(&self, reducer: R) -> Result<(), StoreError> {
        if self.inner.dispatching.get() {
            return Err(StoreError::ReducerExecuting {
                operation: "replace_reducer",
            });
        }

        *self.inner.reducer.borrow_mut() = reducer;
        tracing::info!(store = %self.inner.config.name, "Reducer replaced");
        Ok(())
    }

    /// Number of listeners currently subscribed
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// The environment handed to the reducer
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.inner.environment
    }

    /// The configuration this store was built with
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }
}

/// Handle for removing a listener registered with [`Store::subscribe`]
///
/// Dropping the handle does not unsubscribe; call
/// [`Subscription::unsubscribe`]. The handle does not keep the store alive.
#[derive(Debug)]
#[must_use = "dropping a Subscription leaves the listener registered with no way to remove it"]
pub struct Subscription {
    registry: Weak<dyn ListenerRegistry>,
    id: u64,
}

impl Subscription {
    /// Remove the listener from its store
    ///
    /// Returns `true` if the listener was registered. Repeated calls, or calls
    /// after the store is gone, return `false` and do nothing.
    pub fn unsubscribe(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.remove_listener(self.id))
    }

    /// Whether the listener is still registered
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains_listener(self.id))
    }
}

//! # Expensify
//!
//! State container for a small expense tracker.
//!
//! The root state holds a list of expenses and the filter settings used to
//! display them. Each part is owned by its own reducer; [`create_store`]
//! combines both under a [`Store`](expensify_runtime::Store) so every
//! dispatched action reaches both reducers, and listeners see each new
//! snapshot right after it is committed.
//!
//! ## Example
//!
//! ```
//! use expensify::{ExpenseUpdate, NewExpense, actions, create_store};
//! use expensify_runtime::StoreConfig;
//!
//! # fn main() -> Result<(), expensify_runtime::StoreError> {
//! let store = create_store(StoreConfig::default());
//!
//! let added = store.dispatch(actions::add_expense(
//!     NewExpense::new().description("Coffee").amount(300),
//! ))?;
//! let id = added.added_expense().map(|expense| expense.id.clone()).unwrap_or_default();
//!
//! store.dispatch(actions::edit_expense(id, ExpenseUpdate::new().amount(500)))?;
//!
//! assert_eq!(store.state(|s| s.expenses[0].amount), 500);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod demo;
pub mod fixtures;
pub mod reducer;
pub mod selectors;
pub mod types;

pub use config::{DemoConfig, OutputFormat};
pub use reducer::{
    ExpensesReducer, ExpensifyReducer, ExpensifyStore, FiltersReducer, expensify_reducer,
};
pub use types::{
    Expense, ExpenseId, ExpenseUpdate, ExpensifyAction, ExpensifyState, FilterSettings, NewExpense,
    SortBy,
};

use expensify_runtime::{Store, StoreConfig};

/// Create a store over the default (empty) state
#[must_use]
pub fn create_store(config: StoreConfig) -> ExpensifyStore {
    create_store_with_state(ExpensifyState::default(), config)
}

/// Create a store starting from `state`
#[must_use]
pub fn create_store_with_state(state: ExpensifyState, config: StoreConfig) -> ExpensifyStore {
    Store::with_config(state, expensify_reducer(), (), config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use expensify_testing::RecordingListener;

    #[test]
    fn store_starts_empty() {
        let store = create_store(StoreConfig::default());
        assert_eq!(*store.snapshot(), ExpensifyState::default());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn store_from_fixture_keeps_state() {
        let store = create_store_with_state(fixtures::demo_state(), StoreConfig::default());
        let recorder = RecordingListener::new();
        let _subscription = store.subscribe(recorder.listener());

        store.dispatch(actions::sort_by_date()).unwrap();

        let last = recorder.last().unwrap();
        assert_eq!(last.filters.sort_by, SortBy::Date);
        assert_eq!(last.expenses, fixtures::demo_state().expenses);
    }
}

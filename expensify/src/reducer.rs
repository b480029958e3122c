//! Reducers for the expense tracker.
//!
//! [`ExpensesReducer`] owns the expense list and [`FiltersReducer`] owns the
//! filter settings. [`expensify_reducer`] scopes each to its field of
//! [`ExpensifyState`] and combines them, so every dispatched action reaches
//! both.

use crate::types::{Expense, ExpensifyAction, ExpensifyState, FilterSettings, SortBy};
use expensify_core::composition::BoxedReducer;
use expensify_core::{CombinedReducer, Reducer, combine_reducers, scope_reducer};
use expensify_runtime::Store;

/// Root reducer type produced by [`expensify_reducer`]
pub type ExpensifyReducer = CombinedReducer<ExpensifyState, ExpensifyAction, ()>;

/// Store running the expense tracker's root reducer
pub type ExpensifyStore = Store<ExpensifyState, ExpensifyAction, (), ExpensifyReducer>;

/// Reducer for the expense list
///
/// Insertion order is preserved. Ids stay unique: adding an expense whose id
/// is already listed leaves the list unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpensesReducer;

impl Reducer for ExpensesReducer {
    type State = Vec<Expense>;
    type Action = ExpensifyAction;
    type Environment = ();

    fn reduce(&self, state: &mut Vec<Expense>, action: ExpensifyAction, _env: &()) {
        match action {
            ExpensifyAction::AddExpense { expense } => {
                if state.iter().any(|existing| existing.id == expense.id) {
                    tracing::warn!(id = %expense.id, "Ignoring expense with duplicate id");
                } else {
                    state.push(expense);
                }
            },

            ExpensifyAction::RemoveExpense { id } => {
                state.retain(|expense| expense.id != id);
            },

            ExpensifyAction::EditExpense { id, updates } => {
                let mut edited = 0_usize;
                for expense in state.iter_mut().filter(|expense| expense.id == id) {
                    updates.apply_to(expense);
                    edited += 1;
                }
                if edited == 0 {
                    tracing::trace!(%id, "Edit for unknown expense ignored");
                }
            },

            ExpensifyAction::SetTextFilter { .. }
            | ExpensifyAction::SortByDate
            | ExpensifyAction::SortByAmount
            | ExpensifyAction::SetStartDate { .. }
            | ExpensifyAction::SetEndDate { .. } => {},
        }
    }
}

/// Reducer for the filter settings
#[derive(Clone, Copy, Debug, Default)]
pub struct FiltersReducer;

impl Reducer for FiltersReducer {
    type State = FilterSettings;
    type Action = ExpensifyAction;
    type Environment = ();

    fn reduce(&self, state: &mut FilterSettings, action: ExpensifyAction, _env: &()) {
        match action {
            ExpensifyAction::SetTextFilter { text } => state.text = text,
            ExpensifyAction::SortByDate => state.sort_by = SortBy::Date,
            ExpensifyAction::SortByAmount => state.sort_by = SortBy::Amount,
            ExpensifyAction::SetStartDate { date } => state.start_date = date,
            ExpensifyAction::SetEndDate { date } => state.end_date = date,

            ExpensifyAction::AddExpense { .. }
            | ExpensifyAction::RemoveExpense { .. }
            | ExpensifyAction::EditExpense { .. } => {},
        }
    }
}

fn expenses_of(state: &mut ExpensifyState) -> &mut Vec<Expense> {
    &mut state.expenses
}

fn filters_of(state: &mut ExpensifyState) -> &mut FilterSettings {
    &mut state.filters
}

/// Build the root reducer: expenses under `expenses`, filters under `filters`
///
/// # Example
///
/// ```
/// use expensify::{ExpensifyState, actions, expensify_reducer};
/// use expensify_core::Reducer;
///
/// let reducer = expensify_reducer();
/// let state = reducer.reduced(
///     &ExpensifyState::default(),
///     actions::set_text_filter("rent"),
///     &(),
/// );
/// assert_eq!(state.filters.text, "rent");
/// ```
#[must_use]
pub fn expensify_reducer() -> ExpensifyReducer {
    let reducers: Vec<BoxedReducer<ExpensifyState, ExpensifyAction, ()>> = vec![
        Box::new(scope_reducer(ExpensesReducer, expenses_of)),
        Box::new(scope_reducer(FiltersReducer, filters_of)),
    ];
    combine_reducers(reducers)
}

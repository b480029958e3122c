//! Action constructors.
//!
//! Plain functions that build [`ExpensifyAction`] values. Only
//! [`add_expense`] does anything beyond packing its arguments: it applies the
//! input defaults and mints a fresh [`ExpenseId`].

use crate::types::{ExpenseId, ExpenseUpdate, ExpensifyAction, NewExpense};
use chrono::{DateTime, Utc};

/// Build an `AddExpense` action with a freshly generated id
///
/// Unset fields of `fields` take their defaults (see [`NewExpense`]).
///
/// # Example
///
/// ```
/// use expensify::{NewExpense, actions::add_expense};
///
/// let action = add_expense(NewExpense::new().description("Rent").amount(100));
/// let expense = action.added_expense().unwrap();
/// assert_eq!(expense.amount, 100);
/// ```
#[must_use]
pub fn add_expense(fields: NewExpense) -> ExpensifyAction {
    ExpensifyAction::AddExpense {
        expense: fields.into_expense(ExpenseId::new()),
    }
}

/// Build a `RemoveExpense` action; the id is not checked against any state
#[must_use]
pub const fn remove_expense(id: ExpenseId) -> ExpensifyAction {
    ExpensifyAction::RemoveExpense { id }
}

/// Build an `EditExpense` action
#[must_use]
pub const fn edit_expense(id: ExpenseId, updates: ExpenseUpdate) -> ExpensifyAction {
    ExpensifyAction::EditExpense { id, updates }
}

/// Build a `SetTextFilter` action
#[must_use]
pub fn set_text_filter(text: impl Into<String>) -> ExpensifyAction {
    ExpensifyAction::SetTextFilter { text: text.into() }
}

/// Build a `SetTextFilter` action that clears the filter text
#[must_use]
pub fn reset_text_filter() -> ExpensifyAction {
    set_text_filter(String::new())
}

/// Build a `SortByDate` action
#[must_use]
pub const fn sort_by_date() -> ExpensifyAction {
    ExpensifyAction::SortByDate
}

/// Build a `SortByAmount` action
#[must_use]
pub const fn sort_by_amount() -> ExpensifyAction {
    ExpensifyAction::SortByAmount
}

/// Build a `SetStartDate` action; `None` removes the lower bound
#[must_use]
pub const fn set_start_date(date: Option<DateTime<Utc>>) -> ExpensifyAction {
    ExpensifyAction::SetStartDate { date }
}

/// Build a `SetEndDate` action; `None` removes the upper bound
#[must_use]
pub const fn set_end_date(date: Option<DateTime<Utc>>) -> ExpensifyAction {
    ExpensifyAction::SetEndDate { date }
}

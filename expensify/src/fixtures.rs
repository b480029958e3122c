//! Reference state used by the demo and by tests.

use crate::types::{Expense, ExpenseId, ExpensifyState, FilterSettings, SortBy};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fixed id of the expense in [`demo_state`]
pub const DEMO_EXPENSE_ID: Uuid = Uuid::from_u128(1);

/// The reference state shape: one rent expense, filtered on "rent" by amount
#[must_use]
pub fn demo_state() -> ExpensifyState {
    ExpensifyState {
        expenses: vec![Expense {
            id: ExpenseId::from_uuid(DEMO_EXPENSE_ID),
            description: "January Rent".to_string(),
            note: "This was the final payment for that address".to_string(),
            amount: 54_500,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }],
        filters: FilterSettings {
            text: "rent".to_string(),
            sort_by: SortBy::Amount,
            start_date: None,
            end_date: None,
        },
    }
}

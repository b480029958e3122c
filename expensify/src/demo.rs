//! The dispatch sequence replayed by the demo binary.

use crate::actions::{
    add_expense, edit_expense, remove_expense, reset_text_filter, set_text_filter,
};
use crate::reducer::ExpensifyStore;
use crate::types::{ExpenseUpdate, NewExpense};
use anyhow::{Context, Result};

/// Number of actions [`run_demo_sequence`] dispatches
pub const DEMO_DISPATCHES: usize = 6;

/// Add rent and coffee, remove the rent, raise the coffee to 500, then set
/// and clear the text filter
///
/// # Errors
///
/// Returns an error if a dispatch is rejected by the store.
pub fn run_demo_sequence(store: &ExpensifyStore) -> Result<()> {
    let rent = store.dispatch(add_expense(
        NewExpense::new().description("Rent").amount(100),
    ))?;
    let coffee = store.dispatch(add_expense(
        NewExpense::new().description("Coffee").amount(300),
    ))?;

    let rent_id = rent
        .added_expense()
        .map(|expense| expense.id.clone())
        .context("Add action carried no expense")?;
    let coffee_id = coffee
        .added_expense()
        .map(|expense| expense.id.clone())
        .context("Add action carried no expense")?;

    store.dispatch(remove_expense(rent_id))?;
    store.dispatch(edit_expense(coffee_id, ExpenseUpdate::new().amount(500)))?;
    store.dispatch(set_text_filter("rent"))?;
    store.dispatch(reset_text_filter())?;

    Ok(())
}

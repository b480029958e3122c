//! Property tests for the expense reducers.

#![allow(clippy::unwrap_used)]

use expensify::actions::{
    add_expense, remove_expense, set_end_date, set_start_date, set_text_filter, sort_by_amount,
    sort_by_date,
};
use expensify::{
    ExpenseId, ExpensesReducer, ExpensifyAction, FilterSettings, FiltersReducer, NewExpense,
    expensify_reducer,
};
use expensify_core::Reducer;
use proptest::prelude::*;
use std::collections::HashSet;

fn new_expense() -> impl Strategy<Value = NewExpense> {
    (
        proptest::option::of("[a-zA-Z ]{0,12}"),
        proptest::option::of(-10_000_i64..1_000_000),
    )
        .prop_map(|(description, amount)| NewExpense {
            description,
            amount,
            ..NewExpense::default()
        })
}

fn filter_action() -> impl Strategy<Value = ExpensifyAction> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(set_text_filter),
        Just(sort_by_date()),
        Just(sort_by_amount()),
        Just(set_start_date(None)),
        Just(set_end_date(None)),
    ]
}

proptest! {
    #[test]
    fn adds_preserve_insertion_order(inputs in proptest::collection::vec(new_expense(), 0..20)) {
        let actions: Vec<ExpensifyAction> = inputs.into_iter().map(add_expense).collect();
        let expected: Vec<ExpenseId> = actions
            .iter()
            .map(|action| action.added_expense().unwrap().id.clone())
            .collect();

        let mut state = Vec::new();
        for action in actions {
            ExpensesReducer.reduce(&mut state, action, &());
        }

        let ids: Vec<ExpenseId> = state.iter().map(|e| e.id.clone()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn ids_stay_unique(
        inputs in proptest::collection::vec(new_expense(), 1..20),
        replays in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let actions: Vec<ExpensifyAction> = inputs.into_iter().map(add_expense).collect();

        let mut state = Vec::new();
        for action in &actions {
            ExpensesReducer.reduce(&mut state, action.clone(), &());
        }
        // Re-adding an already listed expense must not duplicate it
        for index in replays {
            ExpensesReducer.reduce(&mut state, index.get(&actions).clone(), &());
        }

        let unique: HashSet<&ExpenseId> = state.iter().map(|e| &e.id).collect();
        prop_assert_eq!(unique.len(), state.len());
        prop_assert_eq!(state.len(), actions.len());
    }

    #[test]
    fn remove_drops_only_the_target(
        inputs in proptest::collection::vec(new_expense(), 1..10),
        victim in any::<prop::sample::Index>(),
    ) {
        let actions: Vec<ExpensifyAction> = inputs.into_iter().map(add_expense).collect();
        let id = victim.get(&actions).added_expense().unwrap().id.clone();

        let mut state = Vec::new();
        for action in actions {
            ExpensesReducer.reduce(&mut state, action, &());
        }
        let before = state.clone();
        ExpensesReducer.reduce(&mut state, remove_expense(id.clone()), &());

        let expected: Vec<_> = before.iter().filter(|e| e.id != id).cloned().collect();
        prop_assert_eq!(state.len(), before.len() - 1);
        prop_assert!(state.iter().all(|e| e.id != id));
        prop_assert_eq!(state, expected);
    }

    #[test]
    fn expenses_are_untouched_by_filter_actions(
        inputs in proptest::collection::vec(new_expense(), 0..10),
        actions in proptest::collection::vec(filter_action(), 1..10),
    ) {
        let mut state = Vec::new();
        for input in inputs {
            ExpensesReducer.reduce(&mut state, add_expense(input), &());
        }

        let mut after = state.clone();
        for action in actions {
            ExpensesReducer.reduce(&mut after, action, &());
        }
        prop_assert_eq!(after, state);
    }

    #[test]
    fn filters_are_untouched_by_expense_actions(
        text in "[a-z]{0,8}",
        inputs in proptest::collection::vec(new_expense(), 1..10),
    ) {
        let settings = FilterSettings { text, ..FilterSettings::default() };

        let mut after = settings.clone();
        for input in inputs {
            FiltersReducer.reduce(&mut after, add_expense(input), &());
        }
        prop_assert_eq!(after, settings);
    }

    #[test]
    fn root_reducer_is_pure(inputs in proptest::collection::vec(new_expense(), 0..10)) {
        let reducer = expensify_reducer();
        let mut state = expensify::ExpensifyState::default();
        for input in inputs {
            let before = state.clone();
            let next = reducer.reduced(&state, add_expense(input), &());
            prop_assert_eq!(&state, &before);
            prop_assert_eq!(next.expenses.len(), state.expenses.len() + 1);
            state = next;
        }
    }
}

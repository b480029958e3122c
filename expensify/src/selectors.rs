//! Derived views over the expense state.

use crate::types::{Expense, ExpensifyState, FilterSettings, SortBy};

/// Expenses that pass `filters`, in display order
///
/// An expense is visible when its description contains `filters.text`
/// (ignoring case) and its `created_at` lies within the inclusive date bounds
/// that are set. Results are ordered newest first for [`SortBy::Date`] and
/// largest first for [`SortBy::Amount`]; ties keep list order.
///
/// # Example
///
/// ```
/// use expensify::{ExpenseId, FilterSettings, NewExpense, selectors::visible_expenses};
///
/// let expenses = vec![
///     NewExpense::new().description("Rent").into_expense(ExpenseId::new()),
///     NewExpense::new().description("Coffee").into_expense(ExpenseId::new()),
/// ];
/// let filters = FilterSettings { text: "RENT".to_string(), ..FilterSettings::default() };
///
/// let visible = visible_expenses(&expenses, &filters);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].description, "Rent");
/// ```
#[must_use]
pub fn visible_expenses<'a>(expenses: &'a [Expense], filters: &FilterSettings) -> Vec<&'a Expense> {
    let needle = filters.text.to_lowercase();

    let mut visible: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| needle.is_empty() || expense.description.to_lowercase().contains(&needle))
        .filter(|expense| filters.start_date.is_none_or(|start| expense.created_at >= start))
        .filter(|expense| filters.end_date.is_none_or(|end| expense.created_at <= end))
        .collect();

    match filters.sort_by {
        SortBy::Date => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Amount => visible.sort_by(|a, b| b.amount.cmp(&a.amount)),
    }

    visible
}

/// [`visible_expenses`] applied to a whole state
#[must_use]
pub fn visible_in(state: &ExpensifyState) -> Vec<&Expense> {
    visible_expenses(&state.expenses, &state.filters)
}

/// Sum of the amounts of `expenses`
#[must_use]
pub fn total_amount(expenses: &[&Expense]) -> i64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::{ExpenseId, NewExpense};
    use chrono::{DateTime, Utc};

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(seconds, 0).unwrap()
    }

    fn fixture() -> Vec<Expense> {
        vec![
            NewExpense::new()
                .description("Gum")
                .amount(195)
                .created_at(at(0))
                .into_expense(ExpenseId::new()),
            NewExpense::new()
                .description("Rent")
                .amount(109_500)
                .created_at(at(-4 * 86_400))
                .into_expense(ExpenseId::new()),
            NewExpense::new()
                .description("Credit card")
                .amount(4_500)
                .created_at(at(4 * 86_400))
                .into_expense(ExpenseId::new()),
        ]
    }

    fn descriptions(visible: &[&Expense]) -> Vec<String> {
        visible.iter().map(|e| e.description.clone()).collect()
    }

    #[test]
    fn default_filters_show_everything_newest_first() {
        let expenses = fixture();
        let visible = visible_expenses(&expenses, &FilterSettings::default());
        assert_eq!(descriptions(&visible), vec!["Credit card", "Gum", "Rent"]);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let expenses = fixture();
        let filters = FilterSettings {
            text: "E".to_string(),
            ..FilterSettings::default()
        };
        let visible = visible_expenses(&expenses, &filters);
        assert_eq!(descriptions(&visible), vec!["Credit card", "Rent"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let expenses = fixture();
        let filters = FilterSettings {
            start_date: Some(at(0)),
            end_date: Some(at(4 * 86_400)),
            ..FilterSettings::default()
        };
        let visible = visible_expenses(&expenses, &filters);
        assert_eq!(descriptions(&visible), vec!["Credit card", "Gum"]);
    }

    #[test]
    fn sort_by_amount_largest_first() {
        let expenses = fixture();
        let filters = FilterSettings {
            sort_by: SortBy::Amount,
            ..FilterSettings::default()
        };
        let visible = visible_expenses(&expenses, &filters);
        assert_eq!(descriptions(&visible), vec!["Rent", "Credit card", "Gum"]);
    }

    #[test]
    fn ties_keep_list_order() {
        let expenses = vec![
            NewExpense::new().description("first").into_expense(ExpenseId::new()),
            NewExpense::new().description("second").into_expense(ExpenseId::new()),
        ];
        let visible = visible_expenses(&expenses, &FilterSettings::default());
        assert_eq!(descriptions(&visible), vec!["first", "second"]);
    }

    #[test]
    fn total_of_visible_expenses() {
        let state = ExpensifyState {
            expenses: fixture(),
            filters: FilterSettings {
                text: "r".to_string(),
                ..FilterSettings::default()
            },
        };
        assert_eq!(total_amount(&visible_in(&state)), 109_500 + 4_500);
    }
}

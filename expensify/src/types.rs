//! Domain types for the expense tracker.
//!
//! The root state has two independent parts: the list of expenses and the
//! filter settings used to display them. Each part is owned by its own
//! reducer (see [`crate::reducer`]).
//!
//! Field names serialize in camelCase so printed snapshots read
//! `createdAt`, `sortBy`, `startDate`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an expense
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Creates a new random `ExpenseId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `ExpenseId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded expense
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,
    /// Short description ("Rent", "Coffee")
    pub description: String,
    /// Free-form note
    pub note: String,
    /// Amount in minor currency units (cents)
    pub amount: i64,
    /// When the expense was incurred
    pub created_at: DateTime<Utc>,
}

/// Partially specified input for a new expense
///
/// Missing fields take their defaults when the expense is built:
/// empty `description` and `note`, `amount` 0, `created_at` at timestamp 0.
///
/// # Example
///
/// ```
/// use expensify::{ExpenseId, NewExpense};
///
/// let expense = NewExpense::new()
///     .description("Rent")
///     .amount(100)
///     .into_expense(ExpenseId::new());
///
/// assert_eq!(expense.description, "Rent");
/// assert_eq!(expense.note, "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewExpense {
    /// Description, defaults to `""`
    pub description: Option<String>,
    /// Note, defaults to `""`
    pub note: Option<String>,
    /// Amount, defaults to `0`
    pub amount: Option<i64>,
    /// Creation time, defaults to the Unix epoch
    pub created_at: Option<DateTime<Utc>>,
}

impl NewExpense {
    /// An input with every field unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the note
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the amount
    #[must_use]
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the creation time
    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Apply defaults and build the expense under `id`
    #[must_use]
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            description: self.description.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
            amount: self.amount.unwrap_or(0),
            created_at: self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

/// Field-level changes to an existing expense
///
/// Present fields overwrite the expense's own; absent fields are kept. There
/// is no `id` field: an expense keeps its id for life.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseUpdate {
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// New amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// New creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ExpenseUpdate {
    /// An update that changes nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Change the note
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Change the amount
    #[must_use]
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Change the creation time
    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Whether the update has no fields set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.note.is_none()
            && self.amount.is_none()
            && self.created_at.is_none()
    }

    /// Write every present field over `expense`
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(description) = &self.description {
            expense.description.clone_from(description);
        }
        if let Some(note) = &self.note {
            expense.note.clone_from(note);
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(created_at) = self.created_at {
            expense.created_at = created_at;
        }
    }
}

/// Sort order for the visible expense list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first
    #[default]
    Date,
    /// Largest first
    Amount,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// How the expense list is filtered and ordered for display
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    /// Substring matched against descriptions, empty matches everything
    pub text: String,
    /// Display order
    pub sort_by: SortBy,
    /// Earliest `created_at` shown, inclusive
    pub start_date: Option<DateTime<Utc>>,
    /// Latest `created_at` shown, inclusive
    pub end_date: Option<DateTime<Utc>>,
}

/// Root state of the expense tracker
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensifyState {
    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,
    /// Current filter settings
    pub filters: FilterSettings,
}

impl ExpensifyState {
    /// Returns an expense by id
    #[must_use]
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == *id)
    }
}

/// Every state change the expense tracker understands
///
/// Each action is routed to both reducers; each reducer acts on the variants
/// it owns and ignores the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpensifyAction {
    // ========== Expenses ==========
    /// Append a new expense
    AddExpense {
        /// The fully built expense, id included
        expense: Expense,
    },

    /// Remove every expense with this id
    RemoveExpense {
        /// Expense to remove
        id: ExpenseId,
    },

    /// Overwrite fields of the expense with this id
    EditExpense {
        /// Expense to edit
        id: ExpenseId,
        /// Fields to overwrite
        updates: ExpenseUpdate,
    },

    // ========== Filters ==========
    /// Replace the text filter
    SetTextFilter {
        /// New filter text
        text: String,
    },

    /// Sort visible expenses by date
    SortByDate,

    /// Sort visible expenses by amount
    SortByAmount,

    /// Replace the lower date bound (`None` clears it)
    SetStartDate {
        /// New bound
        date: Option<DateTime<Utc>>,
    },

    /// Replace the upper date bound (`None` clears it)
    SetEndDate {
        /// New bound
        date: Option<DateTime<Utc>>,
    },
}

impl ExpensifyAction {
    /// The expense carried by an `AddExpense` action
    #[must_use]
    pub const fn added_expense(&self) -> Option<&Expense> {
        match self {
            Self::AddExpense { expense } => Some(expense),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn expense_id_display() {
        let id = ExpenseId::new();
        let display = format!("{id}");
        assert_eq!(display, id.as_uuid().to_string());
    }

    #[test]
    fn new_expense_applies_defaults() {
        let id = ExpenseId::new();
        let expense = NewExpense::new().into_expense(id.clone());

        assert_eq!(expense.id, id);
        assert_eq!(expense.description, "");
        assert_eq!(expense.note, "");
        assert_eq!(expense.amount, 0);
        assert_eq!(expense.created_at.timestamp(), 0);
    }

    #[test]
    fn new_expense_keeps_given_fields() {
        let at = DateTime::<Utc>::from_timestamp(1_000, 0).unwrap();
        let expense = NewExpense::new()
            .description("Gas bill")
            .note("winter")
            .amount(4_500)
            .created_at(at)
            .into_expense(ExpenseId::new());

        assert_eq!(expense.description, "Gas bill");
        assert_eq!(expense.note, "winter");
        assert_eq!(expense.amount, 4_500);
        assert_eq!(expense.created_at, at);
    }

    #[test]
    fn update_overwrites_only_present_fields() {
        let mut expense = NewExpense::new()
            .description("Coffee")
            .note("morning")
            .amount(300)
            .into_expense(ExpenseId::new());
        let original = expense.clone();

        ExpenseUpdate::new().amount(500).apply_to(&mut expense);

        assert_eq!(expense.amount, 500);
        assert_eq!(expense.id, original.id);
        assert_eq!(expense.description, original.description);
        assert_eq!(expense.note, original.note);
        assert_eq!(expense.created_at, original.created_at);
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(ExpenseUpdate::new().is_empty());
        assert!(!ExpenseUpdate::new().note("x").is_empty());
    }

    #[test]
    fn filter_settings_default() {
        let filters = FilterSettings::default();
        assert_eq!(filters.text, "");
        assert_eq!(filters.sort_by, SortBy::Date);
        assert_eq!(filters.start_date, None);
        assert_eq!(filters.end_date, None);
    }

    #[test]
    fn actions_serialize_with_type_tag() {
        let action = ExpensifyAction::SetTextFilter {
            text: "rent".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "SET_TEXT_FILTER");
        assert_eq!(json["text"], "rent");

        let json = serde_json::to_value(ExpensifyAction::SortByAmount).unwrap();
        assert_eq!(json["type"], "SORT_BY_AMOUNT");
    }

    #[test]
    fn state_serializes_in_camel_case() {
        let mut state = ExpensifyState::default();
        state
            .expenses
            .push(NewExpense::new().description("Rent").into_expense(ExpenseId::new()));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["filters"]["sortBy"], "date");
        assert!(json["filters"]["startDate"].is_null());
        assert!(json["expenses"][0].get("createdAt").is_some());
    }

    #[test]
    fn edit_action_omits_unset_update_fields() {
        let action = ExpensifyAction::EditExpense {
            id: ExpenseId::new(),
            updates: ExpenseUpdate::new().amount(500),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["updates"], serde_json::json!({ "amount": 500 }));
    }

    #[test]
    fn added_expense_only_for_add() {
        let expense = NewExpense::new().into_expense(ExpenseId::new());
        let add = ExpensifyAction::AddExpense {
            expense: expense.clone(),
        };
        assert_eq!(add.added_expense(), Some(&expense));
        assert_eq!(ExpensifyAction::SortByDate.added_expense(), None);
    }
}

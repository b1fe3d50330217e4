use std::path::Path;

use crate::ClientResult;
use crate::contracts::types::{BudgetRow, DataRangeHint, ExpenseRow};
use crate::insights::date::{format_iso_date, format_period};
use crate::insights::{display_category, normalize_category};
use crate::setup::load_setup;
use crate::store::{Budget, DataRange, Expense, Ledger};

/// Initializes (or verifies) the ledger at the resolved home and opens it.
pub(crate) fn open_ledger(home_override: Option<&Path>) -> ClientResult<Ledger> {
    let setup = load_setup(home_override)?;
    Ledger::open(&setup)
}

pub(crate) fn data_range_hint(data_range: &DataRange) -> DataRangeHint {
    DataRangeHint {
        earliest: data_range.earliest.as_ref().map(format_iso_date),
        latest: data_range.latest.as_ref().map(format_iso_date),
    }
}

pub(crate) fn expense_row(expense: &Expense) -> ExpenseRow {
    ExpenseRow {
        expense_id: expense.expense_id.clone(),
        date: format_iso_date(&expense.spent_on),
        category: expense.category.clone(),
        category_label: display_category(&normalize_category(&expense.category)),
        amount: expense.amount,
        description: expense.description.clone(),
        created_at: expense.created_at.clone(),
    }
}

pub(crate) fn budget_row(budget: &Budget) -> BudgetRow {
    BudgetRow {
        budget_id: budget.budget_id.clone(),
        period: format_period(budget.year, budget.month),
        year: budget.year,
        month: budget.month,
        amount: budget.amount,
        created_at: budget.created_at.clone(),
        updated_at: budget.updated_at.clone(),
    }
}

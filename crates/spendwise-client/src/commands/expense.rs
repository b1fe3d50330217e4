use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::commands::common::{data_range_hint, expense_row, open_ledger};
use crate::config::resolve_owner;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ExpenseAddData, ExpenseListData, ExpenseRow};
use crate::insights::date::{format_iso_date, month_range};
use crate::insights::round_to;
use crate::validate::{ExpenseInput, validate_expense};
use crate::{ClientError, ClientResult};

const ADD_COMMAND: &str = "expense add";
const LIST_COMMAND: &str = "expense list";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    /// Only the calendar month containing the reference date.
    Month,
}

impl ListFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Month => "month",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpenseAddOptions<'a> {
    pub input: ExpenseInput,
    pub owner: Option<String>,
    pub as_of: NaiveDate,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Clone)]
pub struct ExpenseListOptions<'a> {
    pub filter: ListFilter,
    pub owner: Option<String>,
    pub as_of: NaiveDate,
    pub home_override: Option<&'a Path>,
}

pub fn add(
    input: ExpenseInput,
    owner: Option<&str>,
    as_of: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    add_with_options(ExpenseAddOptions {
        input,
        owner: owner.map(std::string::ToString::to_string),
        as_of,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn add_with_options(options: ExpenseAddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let owner = resolve_owner(options.owner.as_deref())?;
    let new_expense = validate_expense(&owner, &options.input, options.as_of, ADD_COMMAND)?;

    let ledger = open_ledger(options.home_override)?;
    let expense = ledger.create_expense(&new_expense)?;

    success(
        ADD_COMMAND,
        ExpenseAddData {
            owner,
            expense: expense_row(&expense),
        },
    )
}

pub fn list(
    filter: ListFilter,
    owner: Option<&str>,
    as_of: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    list_with_options(ExpenseListOptions {
        filter,
        owner: owner.map(std::string::ToString::to_string),
        as_of,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: ExpenseListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let owner = resolve_owner(options.owner.as_deref())?;
    let range = match options.filter {
        ListFilter::All => None,
        ListFilter::Month => Some(
            month_range(options.as_of.year(), options.as_of.month()).ok_or_else(|| {
                ClientError::invalid_argument_for_command(
                    "Reference date falls outside the supported calendar.",
                    Some(LIST_COMMAND),
                )
            })?,
        ),
    };

    let ledger = open_ledger(options.home_override)?;
    let expenses = ledger.list_expenses(&owner, range.as_ref())?;
    let data_range = ledger.data_range(&owner)?;

    let rows = expenses.iter().map(expense_row).collect::<Vec<ExpenseRow>>();
    let total = round_to(expenses.iter().map(|expense| expense.amount).sum(), 2);

    let data = ExpenseListData {
        owner,
        filter: options.filter.as_str().to_string(),
        from: range.as_ref().map(|value| format_iso_date(&value.from)),
        to: range.as_ref().map(|value| format_iso_date(&value.to)),
        total,
        count: rows.len(),
        rows,
        data_range_hint: data_range_hint(&data_range),
    };

    success(LIST_COMMAND, data)
}

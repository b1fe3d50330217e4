use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::commands::common::{budget_row, open_ledger};
use crate::config::resolve_owner;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BudgetSetData, BudgetShowData};
use crate::insights::date::{format_period, month_range, parse_period};
use crate::insights::{month_total, percent_used, remaining};
use crate::store::UpsertOutcome;
use crate::validate::parse_amount;
use crate::{ClientError, ClientResult};

const SET_COMMAND: &str = "budget set";
const SHOW_COMMAND: &str = "budget show";

#[derive(Debug, Clone)]
pub struct BudgetSetOptions<'a> {
    pub amount: String,
    /// `YYYY-MM`; defaults to the month of `as_of`.
    pub period: Option<String>,
    /// Refuse to overwrite an existing budget for the period.
    pub create_only: bool,
    pub owner: Option<String>,
    pub as_of: NaiveDate,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Clone)]
pub struct BudgetShowOptions<'a> {
    pub period: Option<String>,
    pub owner: Option<String>,
    pub as_of: NaiveDate,
    pub home_override: Option<&'a Path>,
}

pub fn set(
    amount: &str,
    period: Option<&str>,
    create_only: bool,
    owner: Option<&str>,
    as_of: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    set_with_options(BudgetSetOptions {
        amount: amount.to_string(),
        period: period.map(std::string::ToString::to_string),
        create_only,
        owner: owner.map(std::string::ToString::to_string),
        as_of,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn set_with_options(options: BudgetSetOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let owner = resolve_owner(options.owner.as_deref())?;
    let amount = parse_amount(&options.amount, "amount", SET_COMMAND)?;
    let (year, month) = resolve_period(options.period.as_deref(), options.as_of, SET_COMMAND)?;

    let mut ledger = open_ledger(options.home_override)?;
    let (budget, outcome) = if options.create_only {
        (
            ledger.insert_budget(&owner, year, month, amount)?,
            UpsertOutcome::Created,
        )
    } else {
        ledger.upsert_budget(&owner, year, month, amount)?
    };

    success(
        SET_COMMAND,
        BudgetSetData {
            owner,
            outcome: outcome.as_str().to_string(),
            budget: budget_row(&budget),
        },
    )
}

pub fn show(
    period: Option<&str>,
    owner: Option<&str>,
    as_of: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    show_with_options(BudgetShowOptions {
        period: period.map(std::string::ToString::to_string),
        owner: owner.map(std::string::ToString::to_string),
        as_of,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn show_with_options(options: BudgetShowOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let owner = resolve_owner(options.owner.as_deref())?;
    let (year, month) = resolve_period(options.period.as_deref(), options.as_of, SHOW_COMMAND)?;
    let range = month_range(year, month).ok_or_else(|| {
        ClientError::invalid_argument_for_command("Period is out of range.", Some(SHOW_COMMAND))
    })?;

    let ledger = open_ledger(options.home_override)?;
    let budget = ledger.get_budget(&owner, year, month)?.map(|row| row.amount);
    let expenses = ledger.list_expenses(&owner, Some(&range))?;
    let total_spent = month_total(&expenses, year, month);

    success(
        SHOW_COMMAND,
        BudgetShowData {
            owner,
            period: format_period(year, month),
            budget,
            total_spent,
            remaining: remaining(total_spent, budget),
            percent_used: percent_used(total_spent, budget),
        },
    )
}

fn resolve_period(
    period: Option<&str>,
    as_of: NaiveDate,
    command: &str,
) -> ClientResult<(i32, u32)> {
    match period {
        Some(value) => parse_period(value.trim(), command),
        None => Ok((as_of.year(), as_of.month())),
    }
}

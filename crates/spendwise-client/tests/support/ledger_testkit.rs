use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use spendwise_client::commands::budget::{self, BudgetSetOptions, BudgetShowOptions};
use spendwise_client::commands::expense::{self, ExpenseAddOptions, ExpenseListOptions, ListFilter};
use spendwise_client::commands::insights::{self, InsightsRunOptions};
use spendwise_client::validate::ExpenseInput;
use spendwise_client::{ClientResult, SuccessEnvelope};
use tempfile::{Builder, TempDir};

pub const OWNER: &str = "alice";

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn envelope_value(result: ClientResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok(), "command failed: {:?}", result.as_ref().err());
    if let Ok(success) = result {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value;
        }
    }
    Value::Null
}

pub fn expense_input(amount: &str, category: &str, spent_on: NaiveDate) -> ExpenseInput {
    ExpenseInput {
        amount: amount.to_string(),
        category: Some(category.to_string()),
        description: None,
        date: Some(spent_on.format("%Y-%m-%d").to_string()),
    }
}

pub fn add_expense_as(
    home: &Path,
    owner: &str,
    amount: &str,
    category: &str,
    spent_on: NaiveDate,
) -> Value {
    envelope_value(expense::add_with_options(ExpenseAddOptions {
        input: expense_input(amount, category, spent_on),
        owner: Some(owner.to_string()),
        as_of: spent_on,
        home_override: Some(home),
    }))
}

pub fn add_expense(home: &Path, amount: &str, category: &str, spent_on: NaiveDate) -> Value {
    add_expense_as(home, OWNER, amount, category, spent_on)
}

pub fn list_expenses(home: &Path, filter: ListFilter, as_of: NaiveDate) -> Value {
    envelope_value(expense::list_with_options(ExpenseListOptions {
        filter,
        owner: Some(OWNER.to_string()),
        as_of,
        home_override: Some(home),
    }))
}

pub fn set_budget(home: &Path, amount: &str, period: Option<&str>, as_of: NaiveDate) -> Value {
    envelope_value(budget::set_with_options(set_options(home, amount, period, as_of)))
}

pub fn set_options<'a>(
    home: &'a Path,
    amount: &str,
    period: Option<&str>,
    as_of: NaiveDate,
) -> BudgetSetOptions<'a> {
    BudgetSetOptions {
        amount: amount.to_string(),
        period: period.map(std::string::ToString::to_string),
        create_only: false,
        owner: Some(OWNER.to_string()),
        as_of,
        home_override: Some(home),
    }
}

pub fn show_budget(home: &Path, period: Option<&str>, as_of: NaiveDate) -> Value {
    envelope_value(budget::show_with_options(BudgetShowOptions {
        period: period.map(std::string::ToString::to_string),
        owner: Some(OWNER.to_string()),
        as_of,
        home_override: Some(home),
    }))
}

pub fn insights_payload(home: &Path, as_of: NaiveDate) -> Value {
    envelope_value(insights::run_with_options(InsightsRunOptions {
        owner: Some(OWNER.to_string()),
        as_of,
        benchmark_monthly: Some(15000.0),
        home_override: Some(home),
    }))
}

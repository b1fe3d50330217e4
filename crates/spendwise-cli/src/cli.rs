use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "date must use valid calendar values".to_string())
}

pub const EXPENSE_ADD_AFTER_HELP: &str = "\
Defaults:
  --category     Other
  --description  empty
  --date         today (local time)

Amounts must be zero or positive. Dates use YYYY-MM-DD.

Examples:
  spendwise expense add --amount 12.50 --category Food --description lunch
  spendwise expense add --amount 900 --category Rent --date 2025-06-01
";

pub const BUDGET_SET_AFTER_HELP: &str = "\
Setting a budget for a month that already has one overwrites its amount.
Pass --create-only to refuse the overwrite instead.

Examples:
  spendwise budget set 3000
  spendwise budget set 2500 --period 2025-07
";

#[derive(Debug, Parser)]
#[command(
    name = "spendwise",
    version,
    about = "personal expense tracker with budgets and spending insights",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Ledger owner (defaults to SPENDWISE_OWNER, then `default`)
    #[arg(long, global = true)]
    pub owner: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record and list expenses
    #[command(arg_required_else_help = true)]
    Expense {
        #[command(subcommand)]
        command: ExpenseCommand,
    },
    /// Set and inspect monthly budgets
    #[command(arg_required_else_help = true)]
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },
    /// Show spending trends, budget projection, and tips for the current month
    Insights {
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        as_of: Option<NaiveDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ExpenseCommand {
    /// Record one expense
    #[command(after_long_help = EXPENSE_ADD_AFTER_HELP)]
    Add {
        /// Amount spent, e.g. 12.50
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Free-text category label
        #[arg(long)]
        category: Option<String>,
        /// Optional note
        #[arg(long)]
        description: Option<String>,
        /// Day the money was spent (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List expenses, newest first
    List {
        /// Only show the current month
        #[arg(long)]
        month: bool,
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        as_of: Option<NaiveDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BudgetCommand {
    /// Set the budget for a month
    #[command(after_long_help = BUDGET_SET_AFTER_HELP)]
    Set {
        /// Budget amount, e.g. 3000
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Month to budget (YYYY-MM); defaults to the current month
        #[arg(long)]
        period: Option<String>,
        /// Fail instead of overwriting an existing budget
        #[arg(long)]
        create_only: bool,
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        as_of: Option<NaiveDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show a month's budget, spend, and remaining amount
    Show {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long)]
        period: Option<String>,
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        as_of: Option<NaiveDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

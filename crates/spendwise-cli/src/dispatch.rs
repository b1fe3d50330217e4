use chrono::{Local, NaiveDate};
use spendwise_client::commands::expense::ListFilter;
use spendwise_client::commands::{budget, expense, insights};
use spendwise_client::validate::ExpenseInput;
use spendwise_client::{ClientResult, SuccessEnvelope};

use crate::cli::{BudgetCommand, Cli, Commands, ExpenseCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    dispatch_with_today(cli, today())
}

fn dispatch_with_today(cli: &Cli, today: NaiveDate) -> ClientResult<SuccessEnvelope> {
    let owner = cli.owner.as_deref();
    match &cli.command {
        Commands::Expense { command } => match command {
            ExpenseCommand::Add {
                amount,
                category,
                description,
                date,
                json: _,
            } => expense::add(
                ExpenseInput {
                    amount: amount.clone(),
                    category: category.clone(),
                    description: description.clone(),
                    date: date.clone(),
                },
                owner,
                today,
            ),
            ExpenseCommand::List { month, as_of, .. } => {
                let filter = if *month {
                    ListFilter::Month
                } else {
                    ListFilter::All
                };
                expense::list(filter, owner, as_of.unwrap_or(today))
            }
        },
        Commands::Budget { command } => match command {
            BudgetCommand::Set {
                amount,
                period,
                create_only,
                as_of,
                ..
            } => budget::set(
                amount,
                period.as_deref(),
                *create_only,
                owner,
                as_of.unwrap_or(today),
            ),
            BudgetCommand::Show { period, as_of, .. } => {
                budget::show(period.as_deref(), owner, as_of.unwrap_or(today))
            }
        },
        Commands::Insights { as_of, .. } => insights::run(owner, as_of.unwrap_or(today)),
    }
}

/// The only place the local clock is read.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

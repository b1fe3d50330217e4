//! SQLite-backed record store for expenses and monthly budgets.
//!
//! A [`Ledger`] wraps one connection and is opened per command; nothing here is
//! shared between calls. Reads return owned snapshots so the insights engine can
//! work on plain slices.

mod types;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use ulid::Ulid;

use crate::insights::date::{format_iso_date, parse_iso_date};
use crate::setup::SetupContext;
use crate::state::{is_unique_violation, map_sqlite_error, open_connection};
use crate::{ClientError, ClientResult};

pub use types::{Budget, DataRange, DateRange, Expense, NewExpense, UpsertOutcome};

const BUDGET_SET_COMMAND: &str = "budget set";

pub struct Ledger {
    connection: Connection,
    db_path: PathBuf,
}

impl Ledger {
    pub fn open(setup: &SetupContext) -> ClientResult<Self> {
        Self::open_at(&setup.db_path_buf())
    }

    /// Opens an already-initialized ledger file.
    pub fn open_at(db_path: &Path) -> ClientResult<Self> {
        let connection = open_connection(db_path)?;
        Ok(Self {
            connection,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn create_expense(&self, expense: &NewExpense) -> ClientResult<Expense> {
        let expense_id = format!("exp_{}", Ulid::new());
        let created_at = now_timestamp();
        let spent_on = format_iso_date(&expense.spent_on);

        self.connection
            .execute(
                "INSERT INTO internal_expenses (
                    expense_id,
                    owner,
                    category,
                    amount,
                    description,
                    spent_on,
                    created_at
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    &expense_id,
                    &expense.owner,
                    &expense.category,
                    expense.amount,
                    &expense.description,
                    &spent_on,
                    &created_at
                ],
            )
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;

        tracing::info!(
            %expense_id,
            owner = %expense.owner,
            amount = expense.amount,
            %spent_on,
            "expense recorded"
        );

        Ok(Expense {
            expense_id,
            owner: expense.owner.clone(),
            category: expense.category.clone(),
            amount: expense.amount,
            description: expense.description.clone(),
            spent_on: expense.spent_on,
            created_at,
        })
    }

    /// Expenses for `owner`, newest first. `range` bounds are inclusive.
    pub fn list_expenses(
        &self,
        owner: &str,
        range: Option<&DateRange>,
    ) -> ClientResult<Vec<Expense>> {
        let mut statement = self
            .connection
            .prepare(
                "SELECT
                    expense_id,
                    owner,
                    category,
                    amount,
                    description,
                    spent_on,
                    created_at
                 FROM internal_expenses
                 WHERE owner = ?1
                   AND (?2 IS NULL OR spent_on >= ?2)
                   AND (?3 IS NULL OR spent_on <= ?3)
                 ORDER BY spent_on DESC, expense_id DESC",
            )
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;

        let from_bound = range.map(|value| format_iso_date(&value.from));
        let to_bound = range.map(|value| format_iso_date(&value.to));

        let rows_iter = statement
            .query_map(params![owner, from_bound, to_bound], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;

        let mut expenses = Vec::new();
        for row in rows_iter {
            let (expense_id, owner, category, amount, description, spent_on, created_at) =
                row.map_err(|error| map_sqlite_error(&self.db_path, &error))?;
            let Some(parsed_date) = parse_iso_date(&spent_on) else {
                tracing::warn!(%expense_id, %spent_on, "skipping expense with unreadable date");
                continue;
            };
            expenses.push(Expense {
                expense_id,
                owner,
                category,
                amount,
                description,
                spent_on: parsed_date,
                created_at,
            });
        }

        tracing::debug!(%owner, count = expenses.len(), "loaded expense snapshot");
        Ok(expenses)
    }

    pub fn get_budget(&self, owner: &str, year: i32, month: u32) -> ClientResult<Option<Budget>> {
        read_budget(&self.connection, &self.db_path, owner, year, month)
    }

    /// Creates the budget for (owner, year, month) or overwrites its amount.
    pub fn upsert_budget(
        &mut self,
        owner: &str,
        year: i32,
        month: u32,
        amount: f64,
    ) -> ClientResult<(Budget, UpsertOutcome)> {
        check_budget_values(month, amount)?;
        let db_path = &self.db_path;
        let transaction = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|error| map_sqlite_error(db_path, &error))?;

        let existing_id = transaction
            .query_row(
                "SELECT budget_id FROM internal_budgets
                 WHERE owner = ?1 AND year = ?2 AND month = ?3
                 LIMIT 1",
                params![owner, year, month],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|error| map_sqlite_error(db_path, &error))?;

        let outcome = match existing_id {
            Some(budget_id) => {
                transaction
                    .execute(
                        "UPDATE internal_budgets SET amount = ?1, updated_at = ?2 WHERE budget_id = ?3",
                        params![amount, now_timestamp(), &budget_id],
                    )
                    .map_err(|error| map_sqlite_error(db_path, &error))?;
                UpsertOutcome::Updated
            }
            None => {
                insert_budget_row(&transaction, db_path, owner, year, month, amount)?;
                UpsertOutcome::Created
            }
        };

        let budget = read_budget(&transaction, db_path, owner, year, month)?.ok_or_else(|| {
            ClientError::ledger_init_failed(db_path, "Budget row vanished during upsert.")
        })?;

        transaction
            .commit()
            .map_err(|error| map_sqlite_error(db_path, &error))?;

        tracing::info!(
            %owner,
            year,
            month,
            amount,
            outcome = outcome.as_str(),
            "budget saved"
        );
        Ok((budget, outcome))
    }

    /// Strict insert; an existing row for the period is a `budget_conflict`.
    pub fn insert_budget(
        &self,
        owner: &str,
        year: i32,
        month: u32,
        amount: f64,
    ) -> ClientResult<Budget> {
        check_budget_values(month, amount)?;
        insert_budget_row(&self.connection, &self.db_path, owner, year, month, amount)?;
        read_budget(&self.connection, &self.db_path, owner, year, month)?.ok_or_else(|| {
            ClientError::ledger_init_failed(&self.db_path, "Budget row missing after insert.")
        })
    }

    pub fn budget_count(&self, owner: &str) -> ClientResult<i64> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM internal_budgets WHERE owner = ?1",
                [owner],
                |row| row.get::<_, i64>(0),
            )
            .map_err(|error| map_sqlite_error(&self.db_path, &error))
    }

    pub fn data_range(&self, owner: &str) -> ClientResult<DataRange> {
        let (earliest, latest) = self
            .connection
            .query_row(
                "SELECT MIN(spent_on), MAX(spent_on) FROM internal_expenses WHERE owner = ?1",
                [owner],
                |row| {
                    Ok((
                        row.get::<_, Option<String>>(0)?,
                        row.get::<_, Option<String>>(1)?,
                    ))
                },
            )
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;

        Ok(DataRange {
            earliest: earliest.as_deref().and_then(parse_iso_date),
            latest: latest.as_deref().and_then(parse_iso_date),
        })
    }
}

fn check_budget_values(month: u32, amount: f64) -> ClientResult<()> {
    if !(1..=12).contains(&month) {
        return Err(ClientError::invalid_argument_for_command(
            &format!("Budget month must be between 1 and 12, received {month}."),
            Some(BUDGET_SET_COMMAND),
        ));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(ClientError::invalid_amount(
            "amount",
            &amount.to_string(),
            BUDGET_SET_COMMAND,
        ));
    }
    Ok(())
}

fn insert_budget_row(
    connection: &Connection,
    db_path: &Path,
    owner: &str,
    year: i32,
    month: u32,
    amount: f64,
) -> ClientResult<()> {
    let budget_id = format!("bud_{}", Ulid::new());
    let timestamp = now_timestamp();
    let inserted = connection.execute(
        "INSERT INTO internal_budgets (
            budget_id,
            owner,
            year,
            month,
            amount,
            created_at,
            updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![&budget_id, owner, year, month, amount, &timestamp, &timestamp],
    );

    match inserted {
        Ok(_) => Ok(()),
        Err(error) if is_unique_violation(&error) => {
            tracing::warn!(%owner, year, month, "rejected duplicate budget insert");
            Err(ClientError::budget_conflict(owner, year, month))
        }
        Err(error) => Err(map_sqlite_error(db_path, &error)),
    }
}

fn read_budget(
    connection: &Connection,
    db_path: &Path,
    owner: &str,
    year: i32,
    month: u32,
) -> ClientResult<Option<Budget>> {
    connection
        .query_row(
            "SELECT budget_id, owner, year, month, amount, created_at, updated_at
             FROM internal_budgets
             WHERE owner = ?1 AND year = ?2 AND month = ?3
             LIMIT 1",
            params![owner, year, month],
            |row| {
                Ok(Budget {
                    budget_id: row.get(0)?,
                    owner: row.get(1)?,
                    year: row.get(2)?,
                    month: row.get(3)?,
                    amount: row.get(4)?,
                    created_at: row.get(5)?,
                    updated_at: row.get(6)?,
                })
            },
        )
        .optional()
        .map_err(|error| map_sqlite_error(db_path, &error))
}

pub(crate) fn now_timestamp() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH);
    match now {
        Ok(duration) => format!("{}", duration.as_secs()),
        Err(_) => "0".to_string(),
    }
}

use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `spendwise {cmd} --help` for usage."),
            None => "Run `spendwise --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_amount(field: &str, received: &str, command: &str) -> Self {
        Self::new(
            "invalid_amount",
            &format!("`{field}` must be a non-negative number, received `{received}`."),
            vec![
                "Use digits with an optional decimal point, for example `12.50`.".to_string(),
                format!("Run `spendwise {command} --help` for usage."),
            ],
        )
        .with_data(json!({
            "field": field,
            "received": received,
        }))
    }

    pub fn invalid_date(field: &str, received: &str, command: &str) -> Self {
        Self::new(
            "invalid_date",
            &format!(
                "`{field}` must use YYYY-MM-DD format with a real calendar date, received `{received}`."
            ),
            vec![
                "Use a date such as `2025-06-15`.".to_string(),
                format!("Run `spendwise {command} --help` for usage."),
            ],
        )
        .with_data(json!({
            "field": field,
            "received": received,
        }))
    }

    pub fn budget_conflict(owner: &str, year: i32, month: u32) -> Self {
        Self::new(
            "budget_conflict",
            &format!("A budget for `{owner}` already exists for {year}-{month:02}."),
            vec![
                "Run `spendwise budget set <amount> --period YYYY-MM` to update the existing budget."
                    .to_string(),
                "Run `spendwise budget show --period YYYY-MM` to inspect it.".to_string(),
            ],
        )
        .with_data(json!({
            "owner": owner,
            "year": year,
            "month": month,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn ledger_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_init_permission_denied",
            &format!("Cannot initialize ledger at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `SPENDWISE_HOME` to a writable directory."
            )],
        )
    }

    pub fn ledger_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_locked",
            &format!("Ledger database is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn ledger_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_corrupt",
            &format!("Ledger database appears corrupt at `{location}`."),
            vec![format!(
                "Replace `{location}` with a valid SQLite ledger file or restore from backup."
            )],
        )
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Ledger migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn ledger_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_init_failed",
            &format!("Ledger initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_")
            || matches!(
                self.code.as_str(),
                "ledger_init_permission_denied"
                    | "ledger_locked"
                    | "ledger_corrupt"
                    | "migration_failed"
                    | "ledger_init_failed"
            )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

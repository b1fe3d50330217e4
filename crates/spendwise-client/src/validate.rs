use chrono::NaiveDate;

use crate::insights::date::parse_iso_date_strict;
use crate::store::NewExpense;
use crate::{ClientError, ClientResult};

pub const DEFAULT_CATEGORY: &str = "Other";

/// Raw expense fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

/// Parses a money amount. Rejects empty, negative, NaN and infinite values.
pub fn parse_amount(raw: &str, field: &str, command: &str) -> ClientResult<f64> {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return Err(ClientError::invalid_amount(field, raw, command));
    }

    match candidate.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(ClientError::invalid_amount(field, raw, command)),
    }
}

/// Blank or missing categories become `Other`; anything else is stored as typed, trimmed.
pub fn normalize_category_input(value: Option<&str>) -> String {
    match normalize_optional(value) {
        Some(category) => category,
        None => DEFAULT_CATEGORY.to_string(),
    }
}

pub fn validate_expense(
    owner: &str,
    input: &ExpenseInput,
    as_of: NaiveDate,
    command: &str,
) -> ClientResult<NewExpense> {
    let amount = parse_amount(&input.amount, "amount", command)?;
    let spent_on = match normalize_optional(input.date.as_deref()) {
        Some(raw) => parse_iso_date_strict(&raw, "date", command)?,
        None => as_of,
    };

    Ok(NewExpense {
        owner: owner.to_string(),
        category: normalize_category_input(input.category.as_deref()),
        amount,
        description: input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        spent_on,
    })
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

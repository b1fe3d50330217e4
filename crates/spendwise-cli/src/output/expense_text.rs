use std::io;

use serde_json::Value;

use super::format::{self, Column};

pub fn render_expense_add(data: &Value) -> io::Result<String> {
    let expense = data
        .get("expense")
        .ok_or_else(|| io::Error::other("expense add output requires expense"))?;

    let mut lines = vec!["Expense recorded.".to_string(), String::new()];
    lines.extend(format::key_value_rows(
        &[
            ("Date:", text(expense, "date")),
            ("Category:", text(expense, "category_label")),
            ("Amount:", format::money(number(expense, "amount"))),
            ("Description:", description(expense)),
            ("ID:", text(expense, "expense_id")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_expense_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("expense list output requires rows"))?;

    let scope = match (
        data.get("from").and_then(Value::as_str),
        data.get("to").and_then(Value::as_str),
    ) {
        (Some(from), Some(to)) => format!("Expenses from {from} to {to}"),
        _ => "All expenses".to_string(),
    };

    if rows.is_empty() {
        let mut lines = vec![format!("{scope}: none recorded."), String::new()];
        lines.push("Record one with:".to_string());
        lines.push("  spendwise expense add --amount 12.50 --category Food".to_string());
        if let Some(hint) = data_range_line(data) {
            lines.push(String::new());
            lines.push(hint);
        }
        return Ok(lines.join("\n"));
    }

    let mut lines = vec![
        format!(
            "{scope} ({} total across {} {}):",
            format::money(number(data, "total")),
            rows.len(),
            if rows.len() == 1 { "entry" } else { "entries" }
        ),
        String::new(),
    ];

    let columns = [
        Column::left("Date"),
        Column::left("Category"),
        Column::right("Amount"),
        Column::left("Description"),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "date"),
                text(row, "category_label"),
                format::money(number(row, "amount")),
                description(row),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Expense",
    ));

    Ok(lines.join("\n"))
}

fn data_range_line(data: &Value) -> Option<String> {
    let hint = data.get("data_range_hint")?;
    let earliest = hint.get("earliest").and_then(Value::as_str)?;
    let latest = hint.get("latest").and_then(Value::as_str)?;
    Some(format!("Your ledger has expenses from {earliest} to {latest}."))
}

fn text(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn number(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn description(row: &Value) -> String {
    match row.get("description").and_then(Value::as_str) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "-".to_string(),
    }
}

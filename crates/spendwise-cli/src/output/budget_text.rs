use std::io;

use serde_json::Value;

use super::format;

const NOT_SET: &str = "not set";

pub fn render_budget_set(data: &Value) -> io::Result<String> {
    let budget = data
        .get("budget")
        .ok_or_else(|| io::Error::other("budget set output requires budget"))?;
    let period = budget.get("period").and_then(Value::as_str).unwrap_or("unknown");
    let amount = budget.get("amount").and_then(Value::as_f64).unwrap_or(0.0);

    let headline = match data.get("outcome").and_then(Value::as_str) {
        Some("updated") => format!("Budget for {period} updated to {}.", format::money(amount)),
        _ => format!("Budget for {period} set to {}.", format::money(amount)),
    };

    Ok([
        headline,
        String::new(),
        "Check progress with:".to_string(),
        format!("  spendwise budget show --period {period}"),
    ]
    .join("\n"))
}

pub fn render_budget_show(data: &Value) -> io::Result<String> {
    let period = data
        .get("period")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("budget show output requires period"))?;
    let budget = data.get("budget").and_then(Value::as_f64);
    let total_spent = data.get("total_spent").and_then(Value::as_f64).unwrap_or(0.0);
    let remaining = data.get("remaining").and_then(Value::as_f64);
    let percent_used = data.get("percent_used").and_then(Value::as_f64).unwrap_or(0.0);

    let mut lines = vec![format!("Budget for {period}:"), String::new()];
    let mut entries = vec![
        ("Budget:", format::optional_money(budget, NOT_SET)),
        ("Spent:", format::money(total_spent)),
        ("Remaining:", format::optional_money(remaining, NOT_SET)),
    ];
    if budget.is_some() {
        entries.push(("Used:", format::percent(percent_used)));
    }
    lines.extend(format::key_value_rows(&entries, 2));

    if budget.is_none() {
        lines.push(String::new());
        lines.push("No budget set for this month. Set one with:".to_string());
        lines.push(format!("  spendwise budget set <amount> --period {period}"));
    } else if remaining.is_some_and(|value| value < 0.0) {
        lines.push(String::new());
        lines.push("Spending is over budget for this month.".to_string());
    }

    Ok(lines.join("\n"))
}

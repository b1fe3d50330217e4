use std::io;

use serde_json::Value;

use super::format::{self, Column};

const BAR_WIDTH: usize = 24;
const NOT_SET: &str = "not set";

pub fn render_insights(data: &Value) -> io::Result<String> {
    let projection = data
        .get("projection")
        .ok_or_else(|| io::Error::other("insights output requires projection"))?;
    let daily = array(data, "daily")?;
    let monthly = array(data, "monthly")?;
    let categories = array(data, "categories")?;

    let period = data.get("period").and_then(Value::as_str).unwrap_or("unknown");
    let as_of = data.get("as_of").and_then(Value::as_str).unwrap_or("unknown");
    let budget = data.get("budget").and_then(Value::as_f64);

    let mut lines = vec![format!("Spending insights for {period} (as of {as_of}):"), String::new()];

    let mut summary = vec![
        ("Budget:", format::optional_money(budget, NOT_SET)),
        ("Spent this month:", format::money(number(data, "total_spent"))),
        (
            "Remaining:",
            format::optional_money(data.get("remaining").and_then(Value::as_f64), NOT_SET),
        ),
        (
            "Projected month-end:",
            format!(
                "{} (day {} of {})",
                format::money(number(projection, "projected")),
                integer(projection, "days_passed"),
                integer(projection, "days_in_month"),
            ),
        ),
    ];
    if budget.is_some() {
        summary.push(("Budget used:", format::percent(number(projection, "percent_used"))));
    }
    summary.push(("Typical monthly spend:", format::money(number(data, "benchmark_monthly"))));
    lines.extend(format::key_value_rows(&summary, 2));

    if let Some(top) = data.get("top_category") {
        let label = top.get("label").and_then(Value::as_str).unwrap_or("unknown");
        lines.push(String::new());
        if top.get("key").is_some_and(|key| !key.is_null()) {
            lines.push(format!(
                "Top category: {label} ({})",
                format::money(number(top, "amount"))
            ));
        } else {
            lines.push(format!("Top category: {label}"));
        }
    }

    if !categories.is_empty() {
        lines.push(String::new());
        lines.push("By category:".to_string());
        lines.extend(bar_table("Category", categories, |row| text(row, "label")));
    }

    let active_days = daily
        .iter()
        .filter(|row| number(row, "total") > 0.0)
        .cloned()
        .collect::<Vec<Value>>();
    lines.push(String::new());
    if active_days.is_empty() {
        lines.push("Last 30 days: no spending recorded.".to_string());
    } else {
        lines.push(format!(
            "Last 30 days ({} of {} days with spending):",
            active_days.len(),
            daily.len()
        ));
        lines.extend(bar_table("Day", &active_days, |row| text(row, "label")));
    }

    lines.push(String::new());
    lines.push("This year by month:".to_string());
    lines.extend(bar_table("Month", monthly, |row| text(row, "label")));

    let tips = data
        .get("tips")
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect::<Vec<&str>>())
        .unwrap_or_default();
    if !tips.is_empty() {
        lines.push(String::new());
        lines.push("Tips:".to_string());
        for tip in tips {
            lines.push(format!("  - {tip}"));
        }
    }

    Ok(lines.join("\n"))
}

fn bar_table(label_column: &str, rows: &[Value], label: impl Fn(&Value) -> String) -> Vec<String> {
    let max = rows
        .iter()
        .map(|row| number(row, "total"))
        .fold(0.0_f64, f64::max);
    let columns = [
        Column::left(label_column),
        Column::right("Total"),
        Column::left(""),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            let total = number(row, "total");
            vec![label(row), format::money(total), format::bar(total, max, BAR_WIDTH)]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), label_column)
}

fn array<'a>(data: &'a Value, key: &str) -> io::Result<&'a [Value]> {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| io::Error::other(format!("insights output requires {key}")))
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

fn integer(row: &Value, key: &str) -> i64 {
    row.get(key).and_then(Value::as_i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::render_insights;

    fn daily(active: &[(&str, f64)]) -> Value {
        let mut rows = (0..30)
            .map(|index| json!({"date": format!("d{index}"), "label": format!("{index:02}-06"), "total": 0.0}))
            .collect::<Vec<Value>>();
        for (offset, (label, total)) in active.iter().enumerate() {
            rows[29 - offset] = json!({"date": "x", "label": label, "total": total});
        }
        Value::Array(rows)
    }

    #[test]
    fn renders_summary_categories_series_and_tips() {
        let data = json!({
            "owner": "alice",
            "as_of": "2025-06-15",
            "period": "2025-06",
            "budget": 3000.0,
            "total_spent": 300.0,
            "remaining": 2700.0,
            "projection": {"days_passed": 15, "days_in_month": 30, "projected": 600.0, "percent_used": 10.0},
            "daily": daily(&[("15-06", 100.0), ("01-06", 200.0)]),
            "monthly": [
                {"month": 1, "label": "Jan", "total": 0.0},
                {"month": 2, "label": "Feb", "total": 500.0}
            ],
            "categories": [
                {"key": "travel", "label": "Travel", "total": 575.0},
                {"key": "food", "label": "Food", "total": 100.0}
            ],
            "top_category": {"key": "travel", "label": "Travel", "amount": 575.0},
            "benchmark_monthly": 15000.0,
            "tips": ["You spent most on Travel (85.2% of total).", "Consider reducing Travel expenses."]
        });

        let rendered = render_insights(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Spending insights for 2025-06 (as of 2025-06-15):"));
            assert!(text.contains("3,000.00"));
            assert!(text.contains("2,700.00"));
            assert!(text.contains("600.00 (day 15 of 30)"));
            assert!(text.contains("10.0%"));
            assert!(text.contains("15,000.00"));
            assert!(text.contains("Top category: Travel (575.00)"));
            assert!(text.contains("Last 30 days (2 of 30 days with spending):"));
            assert!(text.contains("Feb"));
            assert!(text.contains("  - Consider reducing Travel expenses."));
        }
    }

    #[test]
    fn empty_report_shows_sentinel_and_no_budget() {
        let data = json!({
            "as_of": "2025-01-05",
            "period": "2025-01",
            "budget": null,
            "total_spent": 0.0,
            "remaining": null,
            "projection": {"days_passed": 5, "days_in_month": 31, "projected": 0.0, "percent_used": 0.0},
            "daily": daily(&[]),
            "monthly": [{"month": 1, "label": "Jan", "total": 0.0}],
            "categories": [],
            "top_category": {"key": null, "label": "none found", "amount": 0.0},
            "benchmark_monthly": 15000.0,
            "tips": ["No expenses yet to analyze."]
        });

        let rendered = render_insights(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("not set"));
            assert!(!text.contains("Budget used:"));
            assert!(text.contains("Top category: none found"));
            assert!(!text.contains("By category:"));
            assert!(text.contains("Last 30 days: no spending recorded."));
            assert!(text.contains("  - No expenses yet to analyze."));
        }
    }

    #[test]
    fn missing_series_is_an_error() {
        assert!(render_insights(&json!({"projection": {}})).is_err());
    }
}

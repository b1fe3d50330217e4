use crate::insights::types::CategorySummary;

/// Share of total spend above which the top category gets a "reduce" nudge.
pub const REDUCE_SHARE_THRESHOLD_PERCENT: f64 = 40.0;

pub const NO_EXPENSES_TIP: &str = "No expenses yet to analyze.";

pub fn spending_tips(summary: &CategorySummary) -> Vec<String> {
    if summary.totals.is_empty() {
        return vec![NO_EXPENSES_TIP.to_string()];
    }

    let grand_total = summary.grand_total();
    let share = if grand_total > 0.0 {
        (summary.top.amount / grand_total) * 100.0
    } else {
        0.0
    };

    let mut tips = vec![format!(
        "You spent most on {} ({share:.1}% of total).",
        summary.top.label
    )];
    if share > REDUCE_SHARE_THRESHOLD_PERCENT {
        tips.push(format!("Consider reducing {} expenses.", summary.top.label));
    }
    tips
}

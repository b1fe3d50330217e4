use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::insights::date::{day_label, month_label};
use crate::insights::types::{DailyBucket, MonthlyBucket};
use crate::store::Expense;

pub const DAILY_WINDOW_DAYS: i64 = 30;

/// Trailing 30-day totals ending at `today`, zero-filled and oldest first.
pub fn daily_series(expenses: &[Expense], today: NaiveDate) -> Vec<DailyBucket> {
    let window_start = today - Duration::days(DAILY_WINDOW_DAYS - 1);

    let mut totals: HashMap<NaiveDate, f64> = HashMap::new();
    for expense in expenses {
        if expense.spent_on < window_start || expense.spent_on > today {
            continue;
        }
        *totals.entry(expense.spent_on).or_insert(0.0) += expense.amount;
    }

    (0..DAILY_WINDOW_DAYS)
        .map(|offset| {
            let date = window_start + Duration::days(offset);
            DailyBucket {
                date,
                label: day_label(&date),
                total: totals.get(&date).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

/// January through the month of `today`, current year only.
pub fn monthly_series(expenses: &[Expense], today: NaiveDate) -> Vec<MonthlyBucket> {
    let mut totals = [0.0_f64; 12];
    for expense in expenses {
        if expense.spent_on.year() != today.year() {
            continue;
        }
        let index = expense.spent_on.month0() as usize;
        if let Some(slot) = totals.get_mut(index) {
            *slot += expense.amount;
        }
    }

    (1..=today.month())
        .map(|month| MonthlyBucket {
            month,
            label: month_label(month),
            total: totals[(month - 1) as usize],
        })
        .collect()
}

pub fn month_total(expenses: &[Expense], year: i32, month: u32) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.spent_on.year() == year && expense.spent_on.month() == month)
        .map(|expense| expense.amount)
        .sum()
}

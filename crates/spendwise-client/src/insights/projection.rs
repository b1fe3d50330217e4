use chrono::{Datelike, NaiveDate};

use crate::insights::date::{days_in_month, first_day_of_month};
use crate::insights::types::Projection;

/// Linear month-end extrapolation of `total_spent` as of `today`.
pub fn projection(total_spent: f64, budget: Option<f64>, today: NaiveDate) -> Projection {
    let days_passed = (today - first_day_of_month(today)).num_days() + 1;
    let days_in_month = days_in_month(today.year(), today.month());

    let projected = if days_passed > 0 {
        round_to(
            (total_spent / days_passed as f64) * f64::from(days_in_month),
            2,
        )
    } else {
        0.0
    };

    Projection {
        days_passed,
        days_in_month,
        projected,
        percent_used: percent_used(total_spent, budget),
        remaining: remaining(total_spent, budget),
    }
}

/// Share of the budget spent, one decimal. Zero when the budget is absent or zero.
pub fn percent_used(total_spent: f64, budget: Option<f64>) -> f64 {
    match budget {
        Some(amount) if amount != 0.0 => round_to((total_spent / amount) * 100.0, 1),
        _ => 0.0,
    }
}

pub fn remaining(total_spent: f64, budget: Option<f64>) -> Option<f64> {
    budget.map(|amount| amount - total_spent)
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

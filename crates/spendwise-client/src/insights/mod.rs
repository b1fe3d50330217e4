//! Budget-and-insights aggregation engine.
//!
//! Everything here is a pure function of an expense snapshot, an optional
//! budget and an explicit reference date. Nothing reads the clock or the store.

mod category;
pub mod date;
mod projection;
mod series;
mod tips;
mod types;

use chrono::{Datelike, NaiveDate};

use crate::store::Expense;

pub use category::{category_summary, display_category, normalize_category};
pub use projection::{percent_used, projection, remaining};
pub use series::{DAILY_WINDOW_DAYS, daily_series, month_total, monthly_series};
pub use tips::{NO_EXPENSES_TIP, REDUCE_SHARE_THRESHOLD_PERCENT, spending_tips};
pub use types::{
    CategorySummary, CategoryTotal, DailyBucket, InsightsReport, MonthlyBucket, NONE_FOUND_LABEL,
    Projection, TopCategory,
};

pub(crate) use projection::round_to;

/// Builds the full insights view for the month containing `today`.
///
/// `total_spent` covers that month only; category totals and tips cover the
/// whole snapshot.
pub fn build_report(
    expenses: &[Expense],
    budget: Option<f64>,
    today: NaiveDate,
    benchmark_monthly: f64,
) -> InsightsReport {
    let total_spent = month_total(expenses, today.year(), today.month());
    let categories = category_summary(expenses);
    let tips = spending_tips(&categories);

    InsightsReport {
        as_of: today,
        budget,
        total_spent,
        projection: projection(total_spent, budget, today),
        daily: daily_series(expenses, today),
        monthly: monthly_series(expenses, today),
        categories,
        benchmark_monthly,
        tips,
    }
}

use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::ClientResult;
use crate::commands::common::open_ledger;
use crate::config::{resolve_benchmark_monthly, resolve_owner};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    CategoryRow, DailyRow, InsightsData, MonthlyRow, ProjectionView, TopCategoryView,
};
use crate::insights::date::{format_iso_date, format_period};
use crate::insights::{InsightsReport, build_report};

const COMMAND: &str = "insights";

#[derive(Debug, Clone)]
pub struct InsightsRunOptions<'a> {
    pub owner: Option<String>,
    pub as_of: NaiveDate,
    /// Overrides `SPENDWISE_BENCHMARK_MONTHLY`.
    pub benchmark_monthly: Option<f64>,
    pub home_override: Option<&'a Path>,
}

pub fn run(owner: Option<&str>, as_of: NaiveDate) -> ClientResult<SuccessEnvelope> {
    run_with_options(InsightsRunOptions {
        owner: owner.map(std::string::ToString::to_string),
        as_of,
        benchmark_monthly: None,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: InsightsRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let owner = resolve_owner(options.owner.as_deref())?;
    let benchmark_monthly = options
        .benchmark_monthly
        .unwrap_or_else(resolve_benchmark_monthly);

    let ledger = open_ledger(options.home_override)?;
    let expenses = ledger.list_expenses(&owner, None)?;
    let budget = ledger
        .get_budget(&owner, options.as_of.year(), options.as_of.month())?
        .map(|row| row.amount);

    let report = build_report(&expenses, budget, options.as_of, benchmark_monthly);
    tracing::debug!(
        %owner,
        expenses = expenses.len(),
        total_spent = report.total_spent,
        "built insights report"
    );

    success(COMMAND, insights_data(owner, report))
}

fn insights_data(owner: String, report: InsightsReport) -> InsightsData {
    InsightsData {
        owner,
        as_of: format_iso_date(&report.as_of),
        period: format_period(report.as_of.year(), report.as_of.month()),
        budget: report.budget,
        total_spent: report.total_spent,
        remaining: report.projection.remaining,
        projection: ProjectionView {
            days_passed: report.projection.days_passed,
            days_in_month: report.projection.days_in_month,
            projected: report.projection.projected,
            percent_used: report.projection.percent_used,
        },
        daily: report
            .daily
            .into_iter()
            .map(|bucket| DailyRow {
                date: format_iso_date(&bucket.date),
                label: bucket.label,
                total: bucket.total,
            })
            .collect(),
        monthly: report
            .monthly
            .into_iter()
            .map(|bucket| MonthlyRow {
                month: bucket.month,
                label: bucket.label.to_string(),
                total: bucket.total,
            })
            .collect(),
        categories: report
            .categories
            .totals
            .into_iter()
            .map(|entry| CategoryRow {
                key: entry.key,
                label: entry.label,
                total: entry.total,
            })
            .collect(),
        top_category: TopCategoryView {
            key: report.categories.top.key,
            label: report.categories.top.label,
            amount: report.categories.top.amount,
        },
        benchmark_monthly: report.benchmark_monthly,
        tips: report.tips,
    }
}

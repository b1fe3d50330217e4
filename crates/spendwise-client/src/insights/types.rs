use chrono::NaiveDate;

pub const NONE_FOUND_LABEL: &str = "none found";

#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub month: u32,
    pub label: &'static str,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Trimmed, lowercased grouping key.
    pub key: String,
    pub label: String,
    pub total: f64,
}

/// Dominant category. `key` is `None` only for the empty-input sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCategory {
    pub key: Option<String>,
    pub label: String,
    pub amount: f64,
}

impl TopCategory {
    pub fn none_found() -> Self {
        Self {
            key: None,
            label: NONE_FOUND_LABEL.to_string(),
            amount: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub totals: Vec<CategoryTotal>,
    pub top: TopCategory,
}

impl CategorySummary {
    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|entry| entry.total).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub days_passed: i64,
    pub days_in_month: u32,
    pub projected: f64,
    pub percent_used: f64,
    /// `None` when no budget is set for the month, distinct from a spent-out budget.
    pub remaining: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsReport {
    pub as_of: NaiveDate,
    pub budget: Option<f64>,
    pub total_spent: f64,
    pub projection: Projection,
    pub daily: Vec<DailyBucket>,
    pub monthly: Vec<MonthlyBucket>,
    pub categories: CategorySummary,
    pub benchmark_monthly: f64,
    pub tips: Vec<String>,
}

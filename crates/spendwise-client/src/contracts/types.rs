use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DataRangeHint {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRow {
    pub expense_id: String,
    pub date: String,
    pub category: String,
    pub category_label: String,
    pub amount: f64,
    pub description: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseAddData {
    pub owner: String,
    pub expense: ExpenseRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseListData {
    pub owner: String,
    /// `all` or `month`.
    pub filter: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub total: f64,
    pub count: usize,
    pub rows: Vec<ExpenseRow>,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetRow {
    pub budget_id: String,
    pub period: String,
    pub year: i32,
    pub month: u32,
    pub amount: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetSetData {
    pub owner: String,
    /// `created` or `updated`.
    pub outcome: String,
    pub budget: BudgetRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetShowData {
    pub owner: String,
    pub period: String,
    pub budget: Option<f64>,
    pub total_spent: f64,
    pub remaining: Option<f64>,
    pub percent_used: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionView {
    pub days_passed: i64,
    pub days_in_month: u32,
    pub projected: f64,
    pub percent_used: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyRow {
    pub date: String,
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRow {
    pub month: u32,
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub key: String,
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCategoryView {
    pub key: Option<String>,
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsData {
    pub owner: String,
    pub as_of: String,
    pub period: String,
    pub budget: Option<f64>,
    pub total_spent: f64,
    pub remaining: Option<f64>,
    pub projection: ProjectionView,
    pub daily: Vec<DailyRow>,
    pub monthly: Vec<MonthlyRow>,
    pub categories: Vec<CategoryRow>,
    pub top_category: TopCategoryView,
    pub benchmark_monthly: f64,
    pub tips: Vec<String>,
}

use chrono::NaiveDate;

/// A stored spending record. Never mutated after insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub expense_id: String,
    pub owner: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub spent_on: NaiveDate,
    pub created_at: String,
}

/// A validated expense waiting for a store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub owner: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub spent_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub budget_id: String,
    pub owner: String,
    pub year: i32,
    pub month: u32,
    pub amount: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

impl UpsertOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// Inclusive calendar range used to filter expense reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRange {
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

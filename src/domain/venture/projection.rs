//! Financial simulation value objects.

use serde::{Deserialize, Serialize};

/// Number of months a simulation covers.
pub const SIMULATION_MONTHS: usize = 12;

/// One month of the financial simulation.
///
/// Money fields are plain integers (whole currency units); all derived
/// figures must use exact integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// Month label (e.g. "Month 1").
    pub month: String,
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
    /// A plausible market event for the month (e.g. "Competitor Price Cut").
    pub event: String,
}

impl MonthlyProjection {
    /// Creates a projection row.
    pub fn new(
        month: impl Into<String>,
        revenue: i64,
        expenses: i64,
        profit: i64,
        event: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            revenue,
            expenses,
            profit,
            event: event.into(),
        }
    }
}

/// Sum of revenue across all rows, exact.
pub fn total_revenue(rows: &[MonthlyProjection]) -> i64 {
    rows.iter().map(|r| r.revenue).sum()
}

/// Sum of expenses across all rows, exact.
pub fn total_expenses(rows: &[MonthlyProjection]) -> i64 {
    rows.iter().map(|r| r.expenses).sum()
}

/// Sum of profit across all rows, exact.
pub fn total_profit(rows: &[MonthlyProjection]) -> i64 {
    rows.iter().map(|r| r.profit).sum()
}

//! Monthly summary model

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::MonthPeriod;

/// Income, spending and remaining budget for one calendar month
///
/// `remaining_budget` is the monthly budget minus expenses. Income does not
/// offset it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub total_income: Money,
    pub total_expenses: Money,
    pub remaining_budget: Money,
    pub over_budget: bool,
    pub income_count: usize,
    pub expense_count: usize,
}

impl MonthlySummary {
    pub fn year(&self) -> i32 {
        self.period.year()
    }

    pub fn month(&self) -> u32 {
        self.period.month()
    }
}

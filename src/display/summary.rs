//! Monthly summary display formatting

use super::DisplayOptions;
use crate::models::MonthlySummary;

/// Format a monthly summary, with a warning line when over budget
pub fn format_monthly_summary(summary: &MonthlySummary, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Summary for {}:\n", summary.period));
    output.push_str(&format!(
        "Total Income: {}\n",
        options.money(summary.total_income)
    ));
    output.push_str(&format!(
        "Total Expenses: {}\n",
        options.money(summary.total_expenses)
    ));
    output.push_str(&format!(
        "Remaining Budget: {}\n",
        options.money(summary.remaining_budget)
    ));

    if summary.over_budget {
        output.push_str("Warning: You have exceeded your budget!\n");
    }

    output
}

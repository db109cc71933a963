//! The in-memory ledger
//!
//! Owns the monthly budget and the income and expense records for the
//! lifetime of the process. Every operation validates its input first and
//! either applies the change or rejects it, leaving state untouched.

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryDate, Money, MonthPeriod, MonthlySummary, Record, RecordKind};
use crate::services::PeriodService;

/// Budget plus income and expense records
pub struct Ledger {
    monthly_budget: Money,
    incomes: Vec<Record>,
    expenses: Vec<Record>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger using the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty ledger with a custom clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            monthly_budget: Money::zero(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            clock,
        }
    }

    /// The current monthly budget; zero means it has not been set
    pub fn budget(&self) -> Money {
        self.monthly_budget
    }

    /// Replace the monthly budget
    pub fn set_budget(&mut self, amount: Money) -> LedgerResult<()> {
        if !amount.is_positive() {
            debug!(cents = amount.cents(), "rejected monthly budget");
            return Err(LedgerError::validation(
                "budget must be positive and non-zero",
            ));
        }
        if !amount.is_within_limit() {
            debug!(cents = amount.cents(), "rejected monthly budget");
            return Err(LedgerError::validation(format!(
                "budget must not exceed {}",
                Money::MAX
            )));
        }

        debug!(cents = amount.cents(), "monthly budget set");
        self.monthly_budget = amount;
        Ok(())
    }

    /// Record an income
    pub fn add_income(
        &mut self,
        amount: Money,
        description: &str,
        date: EntryDate,
    ) -> LedgerResult<&Record> {
        self.add(RecordKind::Income, amount, description, date)
    }

    /// Record an expense
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: &str,
        date: EntryDate,
    ) -> LedgerResult<&Record> {
        self.add(RecordKind::Expense, amount, description, date)
    }

    /// Record an income or expense
    pub fn add(
        &mut self,
        kind: RecordKind,
        amount: Money,
        description: &str,
        date: EntryDate,
    ) -> LedgerResult<&Record> {
        let date = date.resolve(self.clock.today());
        let record = Record::new(kind, amount, description, date).inspect_err(|_| {
            debug!(kind = kind.label(), cents = amount.cents(), "rejected record");
        })?;

        debug!(
            kind = kind.label(),
            cents = amount.cents(),
            %date,
            "record added"
        );

        let records = self.records_mut(kind);
        records.push(record);
        Ok(&records[records.len() - 1])
    }

    /// All incomes in the order they were entered
    pub fn list_incomes(&self) -> &[Record] {
        &self.incomes
    }

    /// All expenses in the order they were entered
    pub fn list_expenses(&self) -> &[Record] {
        &self.expenses
    }

    /// Records of one kind in the order they were entered
    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Income => &self.incomes,
            RecordKind::Expense => &self.expenses,
        }
    }

    fn records_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::Income => &mut self.incomes,
            RecordKind::Expense => &mut self.expenses,
        }
    }

    /// Summarize a calendar month
    ///
    /// If `year` or `month` is missing, the current month is used for both.
    pub fn monthly_summary(
        &self,
        year: Option<i32>,
        month: Option<u32>,
    ) -> LedgerResult<MonthlySummary> {
        let period = PeriodService::new(self.clock.as_ref()).resolve(year, month)?;
        self.summary_for(period)
    }

    /// Summarize an already validated calendar month
    ///
    /// Fails only if a monthly total does not fit in a `Money`.
    pub fn summary_for(&self, period: MonthPeriod) -> LedgerResult<MonthlySummary> {
        let too_large = || LedgerError::validation(format!("totals for {} are too large", period));
        let in_period = |records: &[Record]| -> Option<(Money, usize)> {
            records
                .iter()
                .filter(|r| period.contains(r.date()))
                .try_fold((Money::zero(), 0), |(total, count), r| {
                    Some((total.checked_add(r.amount())?, count + 1))
                })
        };

        let (total_income, income_count) =
            in_period(self.incomes.as_slice()).ok_or_else(too_large)?;
        let (total_expenses, expense_count) =
            in_period(self.expenses.as_slice()).ok_or_else(too_large)?;
        let remaining_budget = self
            .monthly_budget
            .checked_sub(total_expenses)
            .ok_or_else(too_large)?;

        debug!(
            %period,
            income_cents = total_income.cents(),
            expense_cents = total_expenses.cents(),
            "monthly summary computed"
        );

        Ok(MonthlySummary {
            period,
            total_income,
            total_expenses,
            remaining_budget,
            over_budget: remaining_budget.is_negative(),
            income_count,
            expense_count,
        })
    }

    /// The clock used to resolve "today"
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> Ledger {
        Ledger::with_clock(Box::new(FixedClock(date(2026, 10, 18))))
    }

    fn on(s: &str) -> EntryDate {
        EntryDate::parse(s).unwrap()
    }

    fn dollars(units: i64) -> Money {
        Money::from_cents(units * 100)
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ledger();
        assert!(ledger.budget().is_zero());
        assert!(ledger.list_incomes().is_empty());
        assert!(ledger.list_expenses().is_empty());
    }

    #[test]
    fn test_set_budget() {
        let mut ledger = ledger();
        ledger.set_budget(dollars(500)).unwrap();
        assert_eq!(ledger.budget(), dollars(500));

        ledger.set_budget(dollars(750)).unwrap();
        assert_eq!(ledger.budget(), dollars(750));
    }

    #[test]
    fn test_set_budget_rejects_non_positive() {
        let mut ledger = ledger();
        let err = ledger.set_budget(Money::zero()).unwrap_err();
        assert_eq!(err.to_string(), "budget must be positive and non-zero");
        assert!(ledger.budget().is_zero());

        ledger.set_budget(dollars(300)).unwrap();
        assert!(ledger.set_budget(dollars(-1)).is_err());
        assert_eq!(ledger.budget(), dollars(300));
    }

    #[test]
    fn test_add_rejects_non_positive_amounts() {
        let mut ledger = ledger();
        for amount in [Money::zero(), Money::from_cents(-1), dollars(-600)] {
            let err = ledger.add_income(amount, "x", EntryDate::Today).unwrap_err();
            assert_eq!(err.to_string(), "income must be positive and non-zero");
            let err = ledger.add_expense(amount, "x", EntryDate::Today).unwrap_err();
            assert_eq!(err.to_string(), "expense must be positive and non-zero");
        }
        assert!(ledger.list_incomes().is_empty());
        assert!(ledger.list_expenses().is_empty());
    }

    #[test]
    fn test_amounts_above_limit_rejected() {
        let mut ledger = ledger();
        let too_big = Money::from_cents(Money::MAX.cents() + 1);

        let err = ledger.set_budget(too_big).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.budget().is_zero());

        assert!(ledger.add_expense(too_big, "x", EntryDate::Today).is_err());
        assert!(ledger.add_income(too_big, "x", EntryDate::Today).is_err());
        assert!(ledger.list_incomes().is_empty());
        assert!(ledger.list_expenses().is_empty());

        ledger.set_budget(Money::MAX).unwrap();
        ledger.add_expense(Money::MAX, "a", on("2024-01-01")).unwrap();
        ledger.add_expense(Money::MAX, "b", on("2024-01-02")).unwrap();
        let summary = ledger.monthly_summary(Some(2024), Some(1)).unwrap();
        assert_eq!(summary.total_expenses.cents(), 2 * Money::MAX.cents());
        assert_eq!(summary.remaining_budget.cents(), -Money::MAX.cents());
        assert!(summary.over_budget);
    }

    #[test]
    fn test_summary_reports_overflowing_totals() {
        let mut ledger = ledger();
        // 9300 entries at the limit exceed i64::MAX cents
        for _ in 0..9300 {
            ledger.add_expense(Money::MAX, "", on("2024-07-15")).unwrap();
        }
        ledger.add_expense(Money::MAX, "", on("2024-08-01")).unwrap();

        let err = ledger.monthly_summary(Some(2024), Some(7)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "totals for 2024-07 are too large");

        let august = ledger.monthly_summary(Some(2024), Some(8)).unwrap();
        assert_eq!(august.total_expenses, Money::MAX);
    }

    #[test]
    fn test_add_uses_explicit_date() {
        let mut ledger = ledger();
        let record = ledger
            .add_expense(dollars(600), "rent", on("2024-01-05"))
            .unwrap();
        assert_eq!(record.date(), date(2024, 1, 5));
        assert_eq!(record.description(), "rent");
    }

    #[test]
    fn test_add_defaults_to_today() {
        let mut ledger = ledger();
        ledger
            .add_income(dollars(10), "", EntryDate::Today)
            .unwrap();
        assert_eq!(ledger.list_incomes()[0].date(), date(2026, 10, 18));
    }

    #[test]
    fn test_records_keep_entry_order_without_dedup() {
        let mut ledger = ledger();
        ledger.add_income(dollars(50), "gift", on("2024-04-01")).unwrap();
        ledger.add_income(dollars(1000), "salary", on("2024-03-01")).unwrap();
        ledger.add_income(dollars(50), "gift", on("2024-04-01")).unwrap();

        let descriptions: Vec<&str> = ledger
            .list_incomes()
            .iter()
            .map(Record::description)
            .collect();
        assert_eq!(descriptions, ["gift", "salary", "gift"]);
        assert!(ledger.list_expenses().is_empty());
        assert_eq!(ledger.records(RecordKind::Income).len(), 3);
    }

    #[test]
    fn test_over_budget_scenario() {
        let mut ledger = ledger();
        ledger.set_budget(dollars(500)).unwrap();
        ledger.add_expense(dollars(600), "rent", on("2024-01-05")).unwrap();

        let summary = ledger.monthly_summary(Some(2024), Some(1)).unwrap();
        assert_eq!(summary.total_expenses, dollars(600));
        assert_eq!(summary.remaining_budget, dollars(-100));
        assert!(summary.over_budget);
    }

    #[test]
    fn test_summary_filters_by_calendar_month() {
        let mut ledger = ledger();
        ledger.add_income(dollars(1000), "salary", on("2024-03-01")).unwrap();
        ledger.add_income(dollars(50), "gift", on("2024-04-01")).unwrap();
        ledger.add_income(dollars(7), "refund", on("2023-03-31")).unwrap();

        let summary = ledger.monthly_summary(Some(2024), Some(3)).unwrap();
        assert_eq!(summary.total_income, dollars(1000));
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.total_expenses, Money::zero());
    }

    #[test]
    fn test_remaining_budget_ignores_income() {
        let mut ledger = ledger();
        ledger.set_budget(dollars(200)).unwrap();
        ledger.add_income(dollars(5000), "salary", on("2024-05-02")).unwrap();
        ledger.add_expense(dollars(150), "food", on("2024-05-10")).unwrap();
        ledger.add_expense(Money::from_cents(7525), "fuel", on("2024-05-31")).unwrap();

        let summary = ledger.monthly_summary(Some(2024), Some(5)).unwrap();
        assert_eq!(summary.total_expenses, Money::from_cents(22525));
        assert_eq!(summary.remaining_budget, Money::from_cents(-2525));
        assert!(summary.over_budget);
        assert_eq!(summary.expense_count, 2);
    }

    #[test]
    fn test_exactly_on_budget_is_not_over() {
        let mut ledger = ledger();
        ledger.set_budget(dollars(100)).unwrap();
        ledger.add_expense(dollars(100), "", on("2024-02-29")).unwrap();

        let summary = ledger.monthly_summary(Some(2024), Some(2)).unwrap();
        assert!(summary.remaining_budget.is_zero());
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_empty_month_summary() {
        let ledger = ledger();
        let summary = ledger.monthly_summary(Some(1999), Some(12)).unwrap();
        assert!(summary.total_income.is_zero());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.remaining_budget.is_zero());
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_summary_defaults_to_current_month() {
        let mut ledger = ledger();
        ledger.add_expense(dollars(20), "today", EntryDate::Today).unwrap();
        ledger.add_expense(dollars(30), "older", on("2026-09-30")).unwrap();

        let summary = ledger.monthly_summary(None, None).unwrap();
        assert_eq!((summary.year(), summary.month()), (2026, 10));
        assert_eq!(summary.total_expenses, dollars(20));

        let partial = ledger.monthly_summary(Some(2026), None).unwrap();
        assert_eq!(partial, summary);
        let partial = ledger.monthly_summary(None, Some(9)).unwrap();
        assert_eq!(partial, summary);
    }

    #[test]
    fn test_summary_rejects_invalid_month() {
        let mut ledger = ledger();
        ledger.set_budget(dollars(10)).unwrap();
        let err = ledger.monthly_summary(Some(2024), Some(13)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("invalid month"));
        assert_eq!(ledger.budget(), dollars(10));
    }

    #[test]
    fn test_reads_do_not_mutate() {
        let mut ledger = ledger();
        ledger.set_budget(dollars(100)).unwrap();
        ledger.add_income(dollars(40), "a", on("2024-06-01")).unwrap();
        ledger.add_expense(dollars(60), "b", on("2024-06-02")).unwrap();

        let first = ledger.monthly_summary(Some(2024), Some(6)).unwrap();
        let incomes = ledger.list_incomes().to_vec();
        let expenses = ledger.list_expenses().to_vec();

        assert_eq!(ledger.monthly_summary(Some(2024), Some(6)).unwrap(), first);
        assert_eq!(ledger.list_incomes(), incomes.as_slice());
        assert_eq!(ledger.list_expenses(), expenses.as_slice());
        assert_eq!(ledger.budget(), dollars(100));
    }
}

//! Summary period service
//!
//! Resolves the optional year/month pair of a summary request into a
//! validated calendar month.

use tracing::debug;

use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthPeriod;

const INVALID_MONTH: &str = "invalid month, must be between 1 and 12";
const INVALID_YEAR_OR_MONTH: &str = "invalid year or month";

/// Service for choosing the month a summary covers
pub struct PeriodService<'a> {
    clock: &'a dyn Clock,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// The month containing today
    pub fn current_period(&self) -> MonthPeriod {
        MonthPeriod::containing(self.clock.today())
    }

    /// Resolve an optional year and month
    ///
    /// If either one is missing both fall back to the current month.
    pub fn resolve(&self, year: Option<i32>, month: Option<u32>) -> LedgerResult<MonthPeriod> {
        match (year, month) {
            (Some(year), Some(month)) => MonthPeriod::new(year, month).map_err(|_| {
                debug!(year, month, "rejected summary month");
                LedgerError::validation(INVALID_MONTH)
            }),
            _ => Ok(self.current_period()),
        }
    }

    /// Resolve year and month typed by a user
    ///
    /// Blank input for either field selects the current month.
    pub fn parse_year_month(&self, year: &str, month: &str) -> LedgerResult<MonthPeriod> {
        let (year, month) = (year.trim(), month.trim());
        if year.is_empty() || month.is_empty() {
            return Ok(self.current_period());
        }

        let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<i64>()) else {
            debug!(year, month, "rejected non-numeric summary period");
            return Err(LedgerError::validation(INVALID_YEAR_OR_MONTH));
        };

        match u32::try_from(month) {
            Ok(month) => self.resolve(Some(year), Some(month)),
            Err(_) => Err(LedgerError::validation(INVALID_MONTH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn month(year: i32, month: u32) -> MonthPeriod {
        MonthPeriod::new(year, month).unwrap()
    }

    #[test]
    fn test_resolve_explicit() {
        let clock = clock();
        let service = PeriodService::new(&clock);
        assert_eq!(service.resolve(Some(2024), Some(3)).unwrap(), month(2024, 3));
    }

    #[test]
    fn test_resolve_defaults_both_when_either_missing() {
        let clock = clock();
        let service = PeriodService::new(&clock);
        assert_eq!(service.resolve(None, None).unwrap(), month(2026, 10));
        assert_eq!(service.resolve(Some(2020), None).unwrap(), month(2026, 10));
        assert_eq!(service.resolve(None, Some(2)).unwrap(), month(2026, 10));
    }

    #[test]
    fn test_resolve_rejects_bad_month() {
        let clock = clock();
        let service = PeriodService::new(&clock);
        for m in [0, 13, 99] {
            let err = service.resolve(Some(2024), Some(m)).unwrap_err();
            assert_eq!(err.to_string(), INVALID_MONTH);
        }
    }

    #[test]
    fn test_parse_year_month() {
        let clock = clock();
        let service = PeriodService::new(&clock);
        assert_eq!(service.parse_year_month("2024", "03").unwrap(), month(2024, 3));
        assert_eq!(service.parse_year_month("", "").unwrap(), month(2026, 10));
        assert_eq!(service.parse_year_month("2024", " ").unwrap(), month(2026, 10));
    }

    #[test]
    fn test_parse_year_month_errors() {
        let clock = clock();
        let service = PeriodService::new(&clock);

        let err = service.parse_year_month("twenty", "3").unwrap_err();
        assert_eq!(err.to_string(), INVALID_YEAR_OR_MONTH);

        let err = service.parse_year_month("2024", "3.5").unwrap_err();
        assert_eq!(err.to_string(), INVALID_YEAR_OR_MONTH);

        let err = service.parse_year_month("2024", "13").unwrap_err();
        assert_eq!(err.to_string(), INVALID_MONTH);

        let err = service.parse_year_month("2024", "-1").unwrap_err();
        assert_eq!(err.to_string(), INVALID_MONTH);
    }
}

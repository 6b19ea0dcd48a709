use std::collections::BTreeMap;

use crate::error::{ReconError, Result};
use crate::models::{Month, YearlyEntry};

/// Per-month expense and income totals taken from the yearly report.
#[derive(Debug, Clone, Default)]
pub struct YearlyReport {
    months: BTreeMap<Month, YearlyEntry>,
}

impl YearlyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `month`. Out-of-range months are
    /// rejected and nothing is stored, as are entries whose profit does not
    /// fit in an `i64`.
    pub fn set_month(&mut self, month: i64, expense: i64, income: i64) -> Result<()> {
        let number = month;
        let month = Month::new(month)?;
        if income.checked_sub(expense).is_none() {
            return Err(ReconError::YearlyOverflow(number));
        }
        self.months.insert(month, YearlyEntry { expense, income });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn months(&self) -> impl Iterator<Item = (Month, &YearlyEntry)> {
        self.months.iter().map(|(m, e)| (*m, e))
    }

    pub fn entry(&self, month: Month) -> Result<&YearlyEntry> {
        self.months.get(&month).ok_or(ReconError::MonthNotFound(month))
    }

    pub fn profit_for_month(&self, month: Month) -> Result<i64> {
        self.entry(month).map(YearlyEntry::profit)
    }

    pub fn expenses_for_month(&self, month: Month) -> Result<i64> {
        self.entry(month).map(|e| e.expense)
    }

    pub fn incomes_for_month(&self, month: Month) -> Result<i64> {
        self.entry(month).map(|e| e.income)
    }

    pub fn average_expense(&self) -> Option<f64> {
        self.average(|e| e.expense)
    }

    pub fn average_income(&self) -> Option<f64> {
        self.average(|e| e.income)
    }

    fn average(&self, field: impl Fn(&YearlyEntry) -> i64) -> Option<f64> {
        if self.months.is_empty() {
            return None;
        }
        let sum: i128 = self.months.values().map(|e| i128::from(field(e))).sum();
        Some(sum as f64 / self.months.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(n: i64) -> Month {
        Month::new(n).unwrap()
    }

    #[test]
    fn test_set_month_and_lookup() {
        let mut report = YearlyReport::new();
        assert!(report.is_empty());
        report.set_month(1, 1200, 3000).unwrap();
        assert_eq!(report.expenses_for_month(month(1)).unwrap(), 1200);
        assert_eq!(report.incomes_for_month(month(1)).unwrap(), 3000);
        assert_eq!(report.profit_for_month(month(1)).unwrap(), 1800);
    }

    #[test]
    fn test_set_month_last_write_wins() {
        let mut report = YearlyReport::new();
        report.set_month(3, 10, 20).unwrap();
        report.set_month(3, 30, 40).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(*report.entry(month(3)).unwrap(), YearlyEntry { expense: 30, income: 40 });
    }

    #[test]
    fn test_set_month_rejects_out_of_range() {
        let mut report = YearlyReport::new();
        assert!(matches!(report.set_month(13, 1, 2), Err(ReconError::InvalidMonth(13))));
        assert!(matches!(report.set_month(0, 1, 2), Err(ReconError::InvalidMonth(0))));
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_month_is_not_found() {
        let mut report = YearlyReport::new();
        report.set_month(1, 100, 200).unwrap();
        assert!(matches!(
            report.expenses_for_month(month(2)),
            Err(ReconError::MonthNotFound(m)) if m == month(2)
        ));
        assert!(report.incomes_for_month(month(2)).is_err());
        assert!(report.profit_for_month(month(2)).is_err());
    }

    #[test]
    fn test_averages() {
        let mut report = YearlyReport::new();
        report.set_month(1, 100, 1000).unwrap();
        report.set_month(2, 300, 2001).unwrap();
        assert_eq!(report.average_expense(), Some(200.0));
        assert_eq!(report.average_income(), Some(1500.5));
    }

    #[test]
    fn test_set_month_rejects_profit_overflow() {
        let mut report = YearlyReport::new();
        assert!(matches!(
            report.set_month(3, i64::MIN, i64::MAX),
            Err(ReconError::YearlyOverflow(3))
        ));
        assert!(report.is_empty());
    }

    #[test]
    fn test_averages_near_i64_max() {
        let mut report = YearlyReport::new();
        report.set_month(1, i64::MAX, i64::MAX).unwrap();
        report.set_month(2, i64::MAX, i64::MAX).unwrap();
        assert_eq!(report.average_expense(), Some(i64::MAX as f64));
    }

    #[test]
    fn test_averages_empty() {
        let report = YearlyReport::new();
        assert_eq!(report.average_expense(), None);
        assert_eq!(report.average_income(), None);
    }

    #[test]
    fn test_months_iterate_in_order() {
        let mut report = YearlyReport::new();
        report.set_month(11, 1, 1).unwrap();
        report.set_month(2, 1, 1).unwrap();
        report.set_month(7, 1, 1).unwrap();
        let order: Vec<u32> = report.months().map(|(m, _)| m.number()).collect();
        assert_eq!(order, vec![2, 7, 11]);
    }
}

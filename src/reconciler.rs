use std::collections::BTreeMap;

use crate::error::{ReconError, Result};
use crate::models::{Metric, Month};
use crate::monthly::MonthlyReport;
use crate::parser::{pair_yearly_rows, parse_monthly, parse_yearly};
use crate::yearly::YearlyReport;

/// Outcome of loading a yearly report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyLoad {
    pub committed: usize,
    /// Out-of-range month numbers whose entries were not stored.
    pub rejected: Vec<i64>,
    /// The report ended with a row that had no pair and was not stored.
    pub dangling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    Mismatch {
        month: Month,
        metric: Metric,
        monthly: i64,
        yearly: i64,
    },
    MissingInYearly(Month),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    pub discrepancies: Vec<Discrepancy>,
}

impl Verification {
    pub fn is_success(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Monthly and yearly data for one fiscal year.
pub struct Reconciler {
    year: i32,
    monthly: BTreeMap<Month, MonthlyReport>,
    yearly: YearlyReport,
}

impl Reconciler {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            monthly: BTreeMap::new(),
            yearly: YearlyReport::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn has_monthly_reports(&self) -> bool {
        !self.monthly.is_empty()
    }

    pub fn monthly_reports(&self) -> impl Iterator<Item = (Month, &MonthlyReport)> {
        self.monthly.iter().map(|(m, r)| (*m, r))
    }

    pub fn monthly_report(&self, month: Month) -> Option<&MonthlyReport> {
        self.monthly.get(&month)
    }

    pub fn yearly_report(&self) -> &YearlyReport {
        &self.yearly
    }

    /// Parse a monthly report and store it under `month`, replacing any earlier
    /// report for that month. Returns the number of rows loaded.
    pub fn load_monthly_report(&mut self, month: i64, text: &str) -> Result<usize> {
        let month = Month::new(month)?;
        let report = MonthlyReport::from_rows(parse_monthly(text)?);
        let rows = report.len();
        self.monthly.insert(month, report);
        Ok(rows)
    }

    /// Parse a yearly report and upsert its month entries. The whole text is
    /// parsed before anything is stored, so a malformed row leaves the
    /// yearly data untouched.
    pub fn load_yearly_report(&mut self, text: &str) -> Result<YearlyLoad> {
        let rows = parse_yearly(text)?;
        let entries = pair_yearly_rows(&rows);
        if let Some((month, _)) = entries
            .iter()
            .find(|(_, e)| e.income.checked_sub(e.expense).is_none())
        {
            return Err(ReconError::YearlyOverflow(*month));
        }
        let mut load = YearlyLoad {
            dangling: rows.len() % 2 == 1,
            ..YearlyLoad::default()
        };
        for (month, entry) in entries {
            match self.yearly.set_month(month, entry.expense, entry.income) {
                Ok(()) => load.committed += 1,
                Err(ReconError::InvalidMonth(n)) => load.rejected.push(n),
                Err(e) => return Err(e),
            }
        }
        Ok(load)
    }

    pub fn verify(&self) -> Result<Verification> {
        if self.monthly.is_empty() {
            return Err(ReconError::NoMonthlyReports);
        }
        if self.yearly.is_empty() {
            return Err(ReconError::NoYearlyReport);
        }
        let mut result = Verification::default();
        for (&month, report) in &self.monthly {
            let yearly_expense = match self.yearly.expenses_for_month(month) {
                Ok(v) => v,
                Err(ReconError::MonthNotFound(m)) => {
                    result.discrepancies.push(Discrepancy::MissingInYearly(m));
                    continue;
                }
                Err(e) => return Err(e),
            };
            let yearly_income = self.yearly.incomes_for_month(month)?;
            let checks = [
                (Metric::Expenses, report.total_expenses(), yearly_expense),
                (Metric::Incomes, report.total_incomes(), yearly_income),
            ];
            for (metric, monthly, yearly) in checks {
                if monthly != yearly {
                    result.discrepancies.push(Discrepancy::Mismatch {
                        month,
                        metric,
                        monthly,
                        yearly,
                    });
                }
            }
        }
        Ok(result)
    }
}

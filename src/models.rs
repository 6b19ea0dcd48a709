use std::fmt;

use crate::error::{ReconError, Result};

/// Calendar month number, always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub fn new(number: i64) -> Result<Self> {
        if (1..=12).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(ReconError::InvalidMonth(number))
        }
    }

    pub fn number(self) -> u32 {
        u32::from(self.0)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of a monthly report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub item_name: String,
    pub is_expense: bool,
    pub quantity: i64,
    pub unit_price: i64,
}

impl Transaction {
    pub fn new(item_name: impl Into<String>, is_expense: bool, quantity: i64, unit_price: i64) -> Self {
        Self {
            item_name: item_name.into(),
            is_expense,
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.quantity * self.unit_price
    }
}

/// Expense and income totals for one month as stated in the yearly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearlyEntry {
    pub expense: i64,
    pub income: i64,
}

impl YearlyEntry {
    pub fn profit(&self) -> i64 {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiggestExpense {
    pub amount: i64,
    pub item_name: String,
}

/// Which total a reconciliation mismatch refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Expenses,
    Incomes,
}

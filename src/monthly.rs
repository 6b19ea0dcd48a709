use crate::models::{BiggestExpense, Transaction};

/// All transactions of a single month. Aggregates are recomputed on every
/// call; rows never change after construction.
#[derive(Debug, Clone, Default)]
pub struct MonthlyReport {
    rows: Vec<Transaction>,
}

impl MonthlyReport {
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name of the income row with the largest positive total. First row wins on ties.
    pub fn most_profitable_product(&self) -> Option<&str> {
        largest(self.rows.iter().filter(|r| !r.is_expense)).map(|r| r.item_name.as_str())
    }

    /// Expense row with the largest positive total. First row wins on ties.
    pub fn biggest_expense(&self) -> Option<BiggestExpense> {
        largest(self.rows.iter().filter(|r| r.is_expense)).map(|r| BiggestExpense {
            amount: r.line_total(),
            item_name: r.item_name.clone(),
        })
    }

    pub fn total_expenses(&self) -> i64 {
        self.rows.iter().filter(|r| r.is_expense).map(Transaction::line_total).sum()
    }

    pub fn total_incomes(&self) -> i64 {
        self.rows.iter().filter(|r| !r.is_expense).map(Transaction::line_total).sum()
    }
}

fn largest<'a>(rows: impl Iterator<Item = &'a Transaction>) -> Option<&'a Transaction> {
    let mut best: Option<&Transaction> = None;
    let mut best_total = 0;
    for row in rows {
        let total = row.line_total();
        if total > best_total {
            best_total = total;
            best = Some(row);
        }
    }
    best
}

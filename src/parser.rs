use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{ReconError, Result};
use crate::models::{Transaction, YearlyEntry};

/// One line of the yearly report: a single expense or income total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyRow {
    pub month: i64,
    pub amount: i64,
    pub is_expense: bool,
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn field<'r>(record: &'r StringRecord, idx: usize, line: usize, name: &'static str) -> Result<&'r str> {
    record
        .get(idx)
        .ok_or(ReconError::MissingField { line, field: name })
}

fn parse_int(raw: &str, line: usize, name: &'static str) -> Result<i64> {
    raw.parse().map_err(|_| ReconError::Parse {
        line,
        field: name,
        value: raw.to_string(),
    })
}

fn parse_bool(raw: &str, line: usize, name: &'static str) -> Result<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ReconError::Parse {
            line,
            field: name,
            value: raw.to_string(),
        })
    }
}

/// Data records of a report, header skipped, paired with their 1-based line number.
fn records(text: &str) -> Result<Vec<(usize, StringRecord)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut out = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(idx + 2, |p| p.line() as usize);
        out.push((line, record));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Monthly report: item_name,is_expense,quantity,unit_price
// ---------------------------------------------------------------------------

/// Parses monthly rows. Every line total and the running expense and income
/// sums must fit in an `i64`, otherwise the line that overflows is reported.
pub fn parse_monthly(text: &str) -> Result<Vec<Transaction>> {
    let mut rows = Vec::new();
    let mut expenses: i64 = 0;
    let mut incomes: i64 = 0;
    for (line, record) in records(text)? {
        let item_name = field(&record, 0, line, "item_name")?;
        let is_expense = parse_bool(field(&record, 1, line, "is_expense")?, line, "is_expense")?;
        let quantity = parse_int(field(&record, 2, line, "quantity")?, line, "quantity")?;
        let unit_price = parse_int(field(&record, 3, line, "unit_price")?, line, "unit_price")?;

        let running = if is_expense { &mut expenses } else { &mut incomes };
        let sum = *running;
        *running = quantity
            .checked_mul(unit_price)
            .and_then(|total| sum.checked_add(total))
            .ok_or(ReconError::Overflow { line })?;

        rows.push(Transaction::new(item_name, is_expense, quantity, unit_price));
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Yearly report: month,amount,is_expense
// ---------------------------------------------------------------------------

pub fn parse_yearly(text: &str) -> Result<Vec<YearlyRow>> {
    records(text)?
        .iter()
        .map(|(line, record)| -> Result<YearlyRow> {
            let line = *line;
            Ok(YearlyRow {
                month: parse_int(field(record, 0, line, "month")?, line, "month")?,
                amount: parse_int(field(record, 1, line, "amount")?, line, "amount")?,
                is_expense: parse_bool(field(record, 2, line, "is_expense")?, line, "is_expense")?,
            })
        })
        .collect()
}

/// Folds yearly rows into per-month entries.
///
/// Rows are expected as one expense row and one income row per month, in
/// either order. The latest expense and income seen so far are carried
/// along and an entry is emitted after every second row, keyed by the month
/// of that row. A trailing unpaired row emits nothing.
pub fn pair_yearly_rows(rows: &[YearlyRow]) -> Vec<(i64, YearlyEntry)> {
    let mut current = YearlyEntry::default();
    let mut entries = Vec::with_capacity(rows.len() / 2);
    for (idx, row) in rows.iter().enumerate() {
        if row.is_expense {
            current.expense = row.amount;
        } else {
            current.income = row.amount;
        }
        if idx % 2 == 1 {
            entries.push((row.month, current));
        }
    }
    entries
}

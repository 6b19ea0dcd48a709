use std::collections::BTreeSet;

use comfy_table::{Cell, Table};

use crate::error::{ReconError, Result};
use crate::fmt::{decimal, error_line, ok_line, warn_line};
use crate::lang::{Lang, Msg};
use crate::models::Month;
use crate::reconciler::{Discrepancy, Reconciler};

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub lang: Lang,
    pub decimal_separator: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            decimal_separator: '.',
        }
    }
}

// ---------------------------------------------------------------------------
// Monthly
// ---------------------------------------------------------------------------

pub fn render_monthly(rec: &Reconciler, lang: Lang) -> String {
    if !rec.has_monthly_reports() {
        return warn_line(lang.text(Msg::NoMonthlyReports));
    }
    let mut lines = Vec::new();
    for (month, report) in rec.monthly_reports() {
        let biggest = report
            .biggest_expense()
            .map(|e| lang.amount_for(e.amount, &e.item_name))
            .unwrap_or_else(|| lang.amount_for(0, ""));
        lines.push(lang.month_name(month).to_string());
        lines.push(format!(
            "{}: {}",
            lang.text(Msg::MostProfitable),
            report.most_profitable_product().unwrap_or("")
        ));
        lines.push(format!("{}: {biggest}", lang.text(Msg::BiggestExpense)));
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Yearly
// ---------------------------------------------------------------------------

pub fn render_yearly(rec: &Reconciler, opts: RenderOptions) -> String {
    let lang = opts.lang;
    let yearly = rec.yearly_report();
    let (Some(avg_expense), Some(avg_income)) = (yearly.average_expense(), yearly.average_income())
    else {
        return warn_line(lang.text(Msg::NoYearlyReport));
    };

    let mut lines = vec![format!("{}: {}", lang.text(Msg::Year), rec.year())];
    if rec.has_monthly_reports() {
        for (month, _) in rec.monthly_reports() {
            match yearly.profit_for_month(month) {
                Ok(profit) => lines.push(lang.profit_for(month, profit)),
                Err(_) => lines.push(warn_line(&lang.missing_in_yearly(month))),
            }
        }
    } else {
        lines.push(warn_line(&format!(
            "{} {}",
            lang.text(Msg::NoMonthlyReports),
            lang.text(Msg::ProfitSkipped)
        )));
    }
    lines.push(format!(
        "{}: {}",
        lang.text(Msg::AverageExpense),
        decimal(avg_expense, opts.decimal_separator)
    ));
    lines.push(format!(
        "{}: {}",
        lang.text(Msg::AverageIncome),
        decimal(avg_income, opts.decimal_separator)
    ));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Run the reconciliation and render it. The flag is true only when every
/// loaded month matched; missing reports render as a warning and count as
/// not verified.
pub fn render_verification(rec: &Reconciler, lang: Lang) -> Result<(String, bool)> {
    let result = match rec.verify() {
        Ok(result) => result,
        Err(ReconError::NoMonthlyReports) => {
            return Ok((warn_line(lang.text(Msg::NoMonthlyReports)), false));
        }
        Err(ReconError::NoYearlyReport) => {
            return Ok((warn_line(lang.text(Msg::NoYearlyReport)), false));
        }
        Err(e) => return Err(e),
    };

    let mut lines = Vec::new();
    for d in &result.discrepancies {
        match d {
            Discrepancy::Mismatch {
                month,
                metric,
                monthly,
                yearly,
            } => {
                let [header, from_monthly, from_yearly] =
                    lang.mismatch_lines(*metric, *month, *monthly, *yearly);
                lines.push(error_line(&header));
                lines.push(from_monthly);
                lines.push(from_yearly);
            }
            Discrepancy::MissingInYearly(month) => {
                lines.push(error_line(&lang.missing_in_yearly(*month)));
            }
        }
    }
    if result.is_success() {
        lines.push(ok_line(lang.text(Msg::VerifySuccess)));
    }
    Ok((lines.join("\n"), result.is_success()))
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

pub fn render_summary(rec: &Reconciler, opts: RenderOptions) -> String {
    let lang = opts.lang;
    let yearly = rec.yearly_report();
    let months: BTreeSet<Month> = rec
        .monthly_reports()
        .map(|(m, _)| m)
        .chain(yearly.months().map(|(m, _)| m))
        .collect();
    if months.is_empty() {
        return warn_line(&format!(
            "{} {}",
            lang.text(Msg::NoMonthlyReports),
            lang.text(Msg::NoYearlyReport)
        ));
    }

    let header = match lang {
        Lang::Ru => ["Месяц", "Траты (месяц)", "Траты (год)", "Доход (месяц)", "Доход (год)", "Статус"],
        Lang::En => ["Month", "Expenses (monthly)", "Expenses (yearly)", "Income (monthly)", "Income (yearly)", "Status"],
    };
    let (ok, differs, missing) = match lang {
        Lang::Ru => ("совпадает", "расхождение", "нет данных"),
        Lang::En => ("ok", "mismatch", "missing"),
    };

    let mut table = Table::new();
    table.set_header(header.to_vec());
    let opt = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
    for month in months {
        let report = rec.monthly_report(month);
        let entry = yearly.entry(month).ok();
        let status = match (report, entry) {
            (Some(r), Some(e)) if r.total_expenses() == e.expense && r.total_incomes() == e.income => ok,
            (Some(_), Some(_)) => differs,
            _ => missing,
        };
        table.add_row(vec![
            Cell::new(lang.month_name(month)),
            Cell::new(opt(report.map(|r| r.total_expenses()))),
            Cell::new(opt(entry.map(|e| e.expense))),
            Cell::new(opt(report.map(|r| r.total_incomes()))),
            Cell::new(opt(entry.map(|e| e.income))),
            Cell::new(status),
        ]);
    }

    let mut out = format!("{}: {}\n{table}", lang.text(Msg::Year), rec.year());
    if let (Some(exp), Some(inc)) = (yearly.average_expense(), yearly.average_income()) {
        out.push_str(&format!(
            "\n{}: {}\n{}: {}",
            lang.text(Msg::AverageExpense),
            decimal(exp, opts.decimal_separator),
            lang.text(Msg::AverageIncome),
            decimal(inc, opts.decimal_separator)
        ));
    }
    out
}

use std::io::Write;

use crate::error::{ReconError, Result};
use crate::fmt::warn_line;
use crate::lang::{Lang, Msg};
use crate::reconciler::Reconciler;
use crate::source::ReportSource;

fn unavailable(out: &mut impl Write, lang: Lang, err: &ReconError) -> Result<()> {
    writeln!(out, "{}", warn_line(lang.text(Msg::ReportUnavailable)))?;
    writeln!(out, "{}", warn_line(&err.to_string()))?;
    Ok(())
}

/// Load every monthly report of the reconciler's year found in `source`.
/// Unreadable or malformed reports are warned about and skipped.
pub fn monthly_reports(
    rec: &mut Reconciler,
    source: &dyn ReportSource,
    lang: Lang,
    out: &mut impl Write,
) -> Result<usize> {
    let months = source.available_months(rec.year());
    if months.is_empty() {
        writeln!(out, "{}", warn_line(lang.text(Msg::ReportUnavailable)))?;
        return Ok(0);
    }
    let mut loaded = 0;
    for month in months {
        let text = match source.monthly(rec.year(), month) {
            Ok(text) => text,
            Err(e) => {
                unavailable(out, lang, &e)?;
                continue;
            }
        };
        match rec.load_monthly_report(i64::from(month.number()), &text) {
            Ok(rows) => {
                writeln!(out, "{}", lang.monthly_loaded(month, rows))?;
                loaded += 1;
            }
            Err(e) => writeln!(out, "{}", warn_line(&lang.load_failed(&e)))?,
        }
    }
    Ok(loaded)
}

/// Load the yearly report. Returns false when nothing could be loaded.
pub fn yearly_report(
    rec: &mut Reconciler,
    source: &dyn ReportSource,
    lang: Lang,
    out: &mut impl Write,
) -> Result<bool> {
    let text = match source.yearly(rec.year()) {
        Ok(text) => text,
        Err(e) => {
            unavailable(out, lang, &e)?;
            return Ok(false);
        }
    };
    match rec.load_yearly_report(&text) {
        Ok(load) => {
            for month in &load.rejected {
                writeln!(out, "{} ({month})", warn_line(lang.text(Msg::InvalidMonth)))?;
            }
            if load.dangling {
                writeln!(out, "{}", warn_line(lang.text(Msg::UnpairedRow)))?;
            }
            writeln!(out, "{}", lang.yearly_loaded(rec.year(), load.committed))?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{}", warn_line(&lang.load_failed(&e)))?;
            Ok(false)
        }
    }
}

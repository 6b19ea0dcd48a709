use std::io::Write;

use crate::cli::{load, Context};
use crate::error::Result;
use crate::reconciler::Reconciler;
use crate::report;

fn load_all(ctx: &Context, out: &mut impl Write) -> Result<Reconciler> {
    let mut rec = Reconciler::new(ctx.year);
    load::monthly_reports(&mut rec, &ctx.source, ctx.lang(), out)?;
    load::yearly_report(&mut rec, &ctx.source, ctx.lang(), out)?;
    writeln!(out)?;
    Ok(rec)
}

/// Returns whether every loaded month matched the yearly report.
pub fn verify(ctx: &Context) -> Result<bool> {
    let mut out = std::io::stdout().lock();
    let rec = load_all(ctx, &mut out)?;
    let (text, ok) = report::render_verification(&rec, ctx.lang())?;
    writeln!(out, "{text}")?;
    Ok(ok)
}

pub fn monthly(ctx: &Context) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let rec = load_all(ctx, &mut out)?;
    writeln!(out, "{}", report::render_monthly(&rec, ctx.lang()))?;
    Ok(())
}

pub fn yearly(ctx: &Context) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let rec = load_all(ctx, &mut out)?;
    writeln!(out, "{}", report::render_yearly(&rec, ctx.opts))?;
    Ok(())
}

pub fn summary(ctx: &Context) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let rec = load_all(ctx, &mut out)?;
    writeln!(out, "{}", report::render_summary(&rec, ctx.opts))?;
    Ok(())
}

use std::io::{BufRead, Write};

use crate::cli::{load, Context};
use crate::error::Result;
use crate::lang::Msg;
use crate::reconciler::Reconciler;
use crate::report;

const MENU: [Msg; 7] = [
    Msg::MenuPrompt,
    Msg::MenuLoadMonthly,
    Msg::MenuLoadYearly,
    Msg::MenuVerify,
    Msg::MenuMonthlyInfo,
    Msg::MenuYearlyInfo,
    Msg::MenuExit,
];

pub fn run(ctx: &Context) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(ctx, stdin.lock(), stdout.lock())
}

/// Numbered command loop. State lives for the whole session, so reports
/// loaded by one command are seen by the next. Ends on `0` or end of input.
pub fn run_with(ctx: &Context, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    let lang = ctx.lang();
    let mut rec = Reconciler::new(ctx.year);
    let mut line = String::new();

    loop {
        for msg in MENU {
            writeln!(out, "{}", lang.text(msg))?;
        }
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim().parse::<u32>() {
            Ok(1) => {
                load::monthly_reports(&mut rec, &ctx.source, lang, &mut out)?;
            }
            Ok(2) => {
                load::yearly_report(&mut rec, &ctx.source, lang, &mut out)?;
            }
            Ok(3) => {
                let (text, _) = report::render_verification(&rec, lang)?;
                writeln!(out, "{text}")?;
            }
            Ok(4) => writeln!(out, "{}", report::render_monthly(&rec, lang))?,
            Ok(5) => writeln!(out, "{}", report::render_yearly(&rec, ctx.opts))?,
            Ok(0) => {
                writeln!(out, "{}", lang.text(Msg::Goodbye))?;
                return Ok(());
            }
            Ok(_) => writeln!(out, "{}", lang.text(Msg::UnknownCommand))?,
            Err(_) => writeln!(out, "{}", lang.text(Msg::NotANumber))?,
        }
    }
}

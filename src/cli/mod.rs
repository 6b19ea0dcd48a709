pub mod config;
pub mod load;
pub mod menu;
pub mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::lang::Lang;
use crate::report::RenderOptions;
use crate::settings::{load_settings, validate_separator, Settings};
use crate::source::DirSource;

#[derive(Parser)]
#[command(name = "recon", about = "Reconcile monthly transaction reports against the yearly summary.")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Directory holding m.YYYYMM.csv and y.YYYY.csv reports
    #[arg(long, global = true)]
    pub dir: Option<String>,
    /// Fiscal year to reconcile
    #[arg(long, global = true)]
    pub year: Option<i32>,
    /// Output language
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Lang>,
    /// Decimal separator for averages
    #[arg(long, global = true)]
    pub decimal: Option<char>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default when no command is given).
    Menu,
    /// Load all reports and check monthly totals against the yearly report.
    Verify,
    /// Show the most profitable product and biggest expense per month.
    Monthly,
    /// Show per-month profit and yearly averages.
    Yearly,
    /// Side-by-side table of monthly and yearly totals.
    Summary,
    /// Show or change saved settings.
    Config {
        /// Default reports directory
        #[arg(long = "set-dir")]
        set_dir: Option<String>,
        /// Default fiscal year
        #[arg(long = "set-year")]
        set_year: Option<i32>,
        /// Default output language
        #[arg(long = "set-lang", value_enum)]
        set_lang: Option<Lang>,
        /// Default decimal separator
        #[arg(long = "set-decimal")]
        set_decimal: Option<char>,
    },
}

/// Everything a command needs for one run, resolved from settings and flags.
pub struct Context {
    pub year: i32,
    pub source: DirSource,
    pub opts: RenderOptions,
}

impl Context {
    pub fn new(settings: &Settings, args: &GlobalArgs) -> Result<Self> {
        let dir = args.dir.clone().unwrap_or_else(|| settings.reports_dir.clone());
        let decimal_separator = validate_separator(args.decimal.unwrap_or(settings.decimal_separator))?;
        Ok(Self {
            year: args.year.unwrap_or(settings.year),
            source: DirSource::new(PathBuf::from(dir)),
            opts: RenderOptions {
                lang: args.lang.unwrap_or(settings.language),
                decimal_separator,
            },
        })
    }

    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        Self::new(&load_settings(), args)
    }

    pub fn lang(&self) -> Lang {
        self.opts.lang
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            reports_dir: "resources".to_string(),
            year: 2021,
            language: Lang::Ru,
            decimal_separator: '.',
        }
    }

    #[test]
    fn test_context_uses_settings() {
        let ctx = Context::new(&settings(), &GlobalArgs::default()).unwrap();
        assert_eq!(ctx.year, 2021);
        assert_eq!(ctx.source.dir(), std::path::Path::new("resources"));
        assert_eq!(ctx.lang(), Lang::Ru);
        assert_eq!(ctx.opts.decimal_separator, '.');
    }

    #[test]
    fn test_flags_override_settings() {
        let args = GlobalArgs {
            dir: Some("/srv/reports".to_string()),
            year: Some(2022),
            lang: Some(Lang::En),
            decimal: Some(','),
        };
        let ctx = Context::new(&settings(), &args).unwrap();
        assert_eq!(ctx.year, 2022);
        assert_eq!(ctx.source.dir(), std::path::Path::new("/srv/reports"));
        assert_eq!(ctx.lang(), Lang::En);
        assert_eq!(ctx.opts.decimal_separator, ',');
    }

    #[test]
    fn test_rejects_digit_separator() {
        let args = GlobalArgs {
            decimal: Some('7'),
            ..GlobalArgs::default()
        };
        assert!(Context::new(&settings(), &args).is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        let cli = Cli::parse_from(["recon", "verify", "--year", "2021", "--lang", "en"]);
        assert!(matches!(cli.command, Some(Commands::Verify)));
        assert_eq!(cli.global.year, Some(2021));
        assert_eq!(cli.global.lang, Some(Lang::En));
    }
}

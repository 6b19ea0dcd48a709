mod cli;
mod error;
mod fmt;
mod lang;
mod models;
mod monthly;
mod parser;
mod reconciler;
mod report;
mod settings;
mod source;
mod yearly;

use clap::Parser;

use cli::{Cli, Commands, Context};
use error::Result;

fn run(cli: Cli) -> Result<i32> {
    let ctx = || Context::from_args(&cli.global);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => cli::menu::run(&ctx()?).map(|_| 0),
        Commands::Verify => Ok(if cli::report::verify(&ctx()?)? { 0 } else { 2 }),
        Commands::Monthly => cli::report::monthly(&ctx()?).map(|_| 0),
        Commands::Yearly => cli::report::yearly(&ctx()?).map(|_| 0),
        Commands::Summary => cli::report::summary(&ctx()?).map(|_| 0),
        Commands::Config {
            set_dir,
            set_year,
            set_lang,
            set_decimal,
        } => cli::config::run(set_dir, set_year, set_lang, set_decimal).map(|_| 0),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

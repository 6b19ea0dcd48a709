use crate::error::Result;
use crate::lang::Lang;
use crate::settings::{load_settings, save_settings, settings_path, validate_separator, Settings};

pub fn run(
    set_dir: Option<String>,
    set_year: Option<i32>,
    set_lang: Option<Lang>,
    set_decimal: Option<char>,
) -> Result<()> {
    let mut settings = load_settings();
    let changed = apply(&mut settings, set_dir, set_year, set_lang, set_decimal)?;
    if changed {
        save_settings(&settings)?;
        println!("Saved {}", settings_path().display());
    }

    println!("Settings:   {}", settings_path().display());
    println!("Reports:    {}", settings.reports_dir);
    println!("Year:       {}", settings.year);
    println!("Language:   {}", settings.language.code());
    println!("Decimal:    {}", settings.decimal_separator);
    Ok(())
}

fn apply(
    settings: &mut Settings,
    set_dir: Option<String>,
    set_year: Option<i32>,
    set_lang: Option<Lang>,
    set_decimal: Option<char>,
) -> Result<bool> {
    let mut changed = false;
    if let Some(dir) = set_dir {
        settings.reports_dir = dir;
        changed = true;
    }
    if let Some(year) = set_year {
        settings.year = year;
        changed = true;
    }
    if let Some(lang) = set_lang {
        settings.language = lang;
        changed = true;
    }
    if let Some(sep) = set_decimal {
        settings.decimal_separator = validate_separator(sep)?;
        changed = true;
    }
    Ok(changed)
}

use std::path::PathBuf;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{ReconError, Result};
use crate::lang::Lang;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default)]
    pub language: Lang,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_reports_dir() -> String {
    "resources".to_string()
}

fn default_year() -> i32 {
    chrono::Local::now().year()
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reports_dir: default_reports_dir(),
            year: default_year(),
            language: Lang::default(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("recon")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &std::path::Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &std::path::Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

pub fn validate_separator(sep: char) -> Result<char> {
    if sep.is_ascii_digit() || sep == '-' || sep.is_whitespace() {
        return Err(ReconError::Settings(format!(
            "{sep:?} cannot be used as a decimal separator"
        )));
    }
    Ok(sep)
}

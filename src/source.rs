use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ReconError, Result};
use crate::models::Month;

/// Where report text comes from. A failed read is reported as
/// [`ReconError::Unavailable`]; callers warn and move on.
pub trait ReportSource {
    fn monthly(&self, year: i32, month: Month) -> Result<String>;
    fn yearly(&self, year: i32) -> Result<String>;
    /// Months of `year` for which a monthly report exists, ascending.
    fn available_months(&self, year: i32) -> Vec<Month>;
}

/// Reports stored as `m.YYYYMM.csv` and `y.YYYY.csv` in one directory.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn monthly_path(&self, year: i32, month: Month) -> PathBuf {
        self.dir.join(format!("m.{year:04}{:02}.csv", month.number()))
    }

    pub fn yearly_path(&self, year: i32) -> PathBuf {
        self.dir.join(format!("y.{year:04}.csv"))
    }
}

static MONTHLY_FILE: OnceLock<Regex> = OnceLock::new();

fn monthly_file_pattern() -> &'static Regex {
    MONTHLY_FILE.get_or_init(|| {
        Regex::new(r"^m\.(\d{4})(\d{2})\.csv$").expect("valid monthly report pattern")
    })
}

fn read(path: PathBuf) -> Result<String> {
    std::fs::read_to_string(&path).map_err(|source| ReconError::Unavailable { path, source })
}

impl ReportSource for DirSource {
    fn monthly(&self, year: i32, month: Month) -> Result<String> {
        read(self.monthly_path(year, month))
    }

    fn yearly(&self, year: i32) -> Result<String> {
        read(self.yearly_path(year))
    }

    fn available_months(&self, year: i32) -> Vec<Month> {
        let re = monthly_file_pattern();
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut months: Vec<Month> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                let caps = re.captures(&name)?;
                let file_year: i32 = caps[1].parse().ok()?;
                if file_year != year {
                    return None;
                }
                let month: i64 = caps[2].parse().ok()?;
                Month::new(month).ok()
            })
            .collect();
        months.sort();
        months.dedup();
        months
    }
}

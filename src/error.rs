use std::path::PathBuf;

use thiserror::Error;

use crate::models::Month;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Month number must be between 1 and 12, got {0}")]
    InvalidMonth(i64),

    #[error("No yearly data for month {0}")]
    MonthNotFound(Month),

    #[error("Line {line}: invalid {field} value {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: amount is too large")]
    Overflow { line: usize },

    #[error("Month {0}: yearly amounts are too large")]
    YearlyOverflow(i64),

    #[error("Line {line}: missing {field} column")]
    MissingField { line: usize, field: &'static str },

    #[error("Cannot read report {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No monthly reports loaded")]
    NoMonthlyReports,

    #[error("No yearly report loaded")]
    NoYearlyReport,

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ReconError>;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid horizon: end {end} is not after start {start}")]
    InvalidHorizon { start: NaiveDate, end: NaiveDate },

    #[error("Invalid account count: {count} (must be positive)")]
    InvalidAccountCount { count: usize },

    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;

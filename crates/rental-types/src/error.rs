//! Error types for rental-quote

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid vehicle type: {0}")]
    InvalidVehicleSelection(String),

    #[error("Invalid date format: '{input}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("End date must be after start date (start {start}, end {end})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Input closed before answering: {0}")]
    InputClosed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Shared error types for the bike sharing dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Required column missing from dataset: {column}")]
    MissingColumn { column: String },

    #[error("Invalid value on line {line} in column {column}: {value:?}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SharedError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn { column: column.into() }
    }

    pub fn invalid_value(line: u64, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

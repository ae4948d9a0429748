//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::{CsvError, MatrixError};

/// Top-level error type, the one that gets displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Csv(#[from] CsvError),

    #[error("{0}")]
    Matrix(#[from] MatrixError),

    #[error("cannot parse '{value}' as an integer (row {row}, column {col})")]
    ParseInt {
        value: String,
        row: usize,
        col: usize,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

use std::path::PathBuf;
use thiserror::Error;

/// Faults raised by the strict tree operations.
///
/// A missing value is only an error for callers that have promised presence
/// (e.g. [`crate::tree::BinaryTree::remove`]); the `try_` variants report the
/// same condition as a plain negative result instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("value not present in this tree")]
    ValueNotFound,
}

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("not a CSV file: {0}")]
    NotCsv(PathBuf),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("cannot parse '{value}' as a number (row {row}, column {col})")]
    ParseNumber {
        value: String,
        row: usize,
        col: usize,
    },
}

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    #[error("element ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("matrices are not the same size: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    SizeMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("not multiplicatively conformable: lhs has {lhs_cols} columns, rhs has {rhs_rows} rows")]
    NotConformable { lhs_cols: usize, rhs_rows: usize },

    #[error("operation requires a row or column vector")]
    NotAVector,

    #[error("matrix elements must be finite")]
    NotFinite,

    #[error("cannot divide matrix by zero")]
    DivideByZero,

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("invalid matrix data string: {0}")]
    InvalidData(String),
}

pub type MatrixResult<T> = Result<T, MatrixError>;

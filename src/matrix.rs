//! Dense `f64` matrix value type.
//!
//! Row-major storage, dimension-checked arithmetic, and the row/column
//! operations needed to slice vectors out of tabular data. All fallible
//! operations return [`MatrixResult`]; the setter additionally rejects
//! non-finite values so arithmetic never has to re-validate its inputs.

use std::fmt;
use std::ops::Index;

use rayon::prelude::*;
use tracing::instrument;

use crate::errors::{MatrixError, MatrixResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// A `rows` x `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from row vectors; every row must have the same
    /// non-zero length.
    pub fn from_rows(data: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let rows = data.len();
        let cols = data.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        for (row, values) in data.iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    got: values.len(),
                    expected: cols,
                });
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// The n x n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i][i] = 1.0;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    fn check_bounds(&self, row: usize, col: usize) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_same_size(&self, other: &Self) -> MatrixResult<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::SizeMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[row][col])
    }

    /// Rejects out-of-range positions and non-finite values.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        if !value.is_finite() {
            return Err(MatrixError::NotFinite);
        }
        self.check_bounds(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Resets every element to zero, keeping the dimensions.
    pub fn clear(&mut self) {
        self.fill(0.0);
    }

    pub fn fill(&mut self, value: f64) {
        for row in &mut self.data {
            row.fill(value);
        }
    }

    /// Fills every element from a generator, row-major order.
    pub fn fill_with(&mut self, mut f: impl FnMut() -> f64) {
        for row in &mut self.data {
            for slot in row {
                *slot = f();
            }
        }
    }

    pub fn add_scalar(&mut self, value: f64) {
        for row in &mut self.data {
            for slot in row {
                *slot += value;
            }
        }
    }

    pub fn add_to_element(&mut self, value: f64, row: usize, col: usize) -> MatrixResult<()> {
        self.check_bounds(row, col)?;
        self.data[row][col] += value;
        Ok(())
    }

    pub fn add_to_row(&mut self, value: f64, row: usize) -> MatrixResult<()> {
        self.check_bounds(row, 0)?;
        for slot in &mut self.data[row] {
            *slot += value;
        }
        Ok(())
    }

    pub fn add_to_col(&mut self, value: f64, col: usize) -> MatrixResult<()> {
        self.check_bounds(0, col)?;
        for row in &mut self.data {
            row[col] += value;
        }
        Ok(())
    }

    /// The given row as a new 1 x cols matrix.
    pub fn row(&self, row: usize) -> MatrixResult<Matrix> {
        self.check_bounds(row, 0)?;
        Ok(Matrix {
            rows: 1,
            cols: self.cols,
            data: vec![self.data[row].clone()],
        })
    }

    /// The given column as a new rows x 1 matrix.
    pub fn col(&self, col: usize) -> MatrixResult<Matrix> {
        self.check_bounds(0, col)?;
        Ok(Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row[col]]).collect(),
        })
    }

    /// Overwrites a column with a rows x 1 column vector.
    pub fn set_col(&mut self, col: usize, column: &Matrix) -> MatrixResult<()> {
        self.check_bounds(0, col)?;
        if column.cols != 1 || column.rows != self.rows {
            return Err(MatrixError::NotAVector);
        }
        for (row, source) in self.data.iter_mut().zip(&column.data) {
            row[col] = source[0];
        }
        Ok(())
    }

    /// Whether this is a single row or a single column.
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(|&v| v == 0.0)
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    /// Flattens a row or column vector into a plain `Vec`.
    pub fn to_packed(&self) -> MatrixResult<Vec<f64>> {
        if self.rows == 1 {
            Ok(self.data[0].clone())
        } else if self.cols == 1 {
            Ok(self.data.iter().map(|row| row[0]).collect())
        } else {
            Err(MatrixError::NotAVector)
        }
    }

    pub fn add(&self, other: &Matrix) -> MatrixResult<Matrix> {
        self.check_same_size(other)?;
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Matrix) -> MatrixResult<Matrix> {
        self.check_same_size(other)?;
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-size matrices.
    pub fn hadamard(&self, other: &Matrix) -> MatrixResult<Matrix> {
        self.check_same_size(other)?;
        self.zip_with(other, |a, b| a * b)
    }

    fn zip_with(&self, other: &Matrix, op: impl Fn(f64, f64) -> f64) -> MatrixResult<Matrix> {
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(lhs, rhs)| lhs.iter().zip(rhs).map(|(&a, &b)| op(a, b)).collect())
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&v| v * scalar).collect())
                .collect(),
        }
    }

    pub fn div_scalar(&self, scalar: f64) -> MatrixResult<Matrix> {
        if scalar == 0.0 {
            return Err(MatrixError::DivideByZero);
        }
        if !scalar.is_finite() {
            return Err(MatrixError::NotFinite);
        }
        Ok(self.scale(1.0 / scalar))
    }

    /// Dot product of two vectors with the same number of elements.
    pub fn dot(&self, other: &Matrix) -> MatrixResult<f64> {
        if !(self.is_vector() && other.is_vector() && self.size() == other.size()) {
            return Err(MatrixError::NotAVector);
        }
        let lhs = self.to_packed()?;
        let rhs = other.to_packed()?;
        Ok(lhs.iter().zip(&rhs).map(|(&a, &b)| a * b).sum())
    }

    /// Matrix product, rows of the result computed in parallel. Not
    /// commutative; `self.cols` must equal `other.rows`.
    #[instrument(level = "debug", skip_all)]
    pub fn multiply(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::NotConformable {
                lhs_cols: self.cols,
                rhs_rows: other.rows,
            });
        }
        let mut result = Matrix::zeros(self.rows, other.cols);
        result
            .data
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, out_row)| {
                for (j, slot) in out_row.iter_mut().enumerate() {
                    *slot = (0..self.cols).map(|k| self.data[i][k] * other.data[k][j]).sum();
                }
            });
        Ok(result)
    }

    /// Serializes as `rows,cols,e00,e01,...` for flat storage, the inverse of
    /// [`Self::from_data_string`].
    pub fn to_data_string(&self) -> String {
        let mut out = format!("{},{}", self.rows, self.cols);
        for value in self.data.iter().flatten() {
            out.push(',');
            out.push_str(&value.to_string());
        }
        out
    }

    pub fn from_data_string(input: &str) -> MatrixResult<Matrix> {
        let mut fields = input.split(',');
        let rows = parse_dim(fields.next(), input)?;
        let cols = parse_dim(fields.next(), input)?;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }

        let mut m = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let field = fields
                    .next()
                    .ok_or_else(|| MatrixError::InvalidData(format!("expected {} elements", rows * cols)))?;
                let value: f64 = field
                    .trim()
                    .parse()
                    .map_err(|_| MatrixError::InvalidData(format!("bad element '{field}'")))?;
                m.set(i, j, value)?;
            }
        }
        if fields.next().is_some() {
            return Err(MatrixError::InvalidData(format!(
                "more than {} elements",
                rows * cols
            )));
        }
        Ok(m)
    }
}

fn parse_dim(field: Option<&str>, input: &str) -> MatrixResult<usize> {
    field
        .and_then(|f| f.trim().parse().ok())
        .ok_or_else(|| MatrixError::InvalidData(format!("missing dimensions in '{input}'")))
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panicking read access; use [`Matrix::get`] for checked access.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j + 1 < self.cols {
                    write!(f, "{value}, ")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
            if i + 1 < self.rows {
                writeln!(f, "],")?;
                write!(f, " ")?;
            } else {
                write!(f, "]]")?;
            }
        }
        Ok(())
    }
}
